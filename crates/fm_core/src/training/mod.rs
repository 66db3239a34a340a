// 주간 훈련 시스템 모듈
// 강도(1-5)와 기간에 비례한 단일 능력치 성장 + 피로/부상 위험

pub mod effects;
pub mod types;

pub use effects::*;
pub use types::*;
