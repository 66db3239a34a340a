pub mod json_api;

pub use json_api::{
    apply_training_json, apply_training_json_with_config, create_transfer_offer_json,
    create_transfer_offer_json_with_config, develop_player_json, develop_player_json_with_config,
    process_match_aftermath_json, process_match_aftermath_json_with_config, simulate_match_json,
    simulate_match_json_with_config, AftermathRequest, AftermathResponse, DevelopRequest,
    DevelopResponse, MatchRequest, MatchResponse, TrainingRequest, TrainingResponse,
    TransferOfferRequest, TransferOfferResponse,
};
