use serde::{Deserialize, Serialize};

use super::player::{Attribute, PlayerAttributes};

/// Sparse attribute update: each present field is the attribute's new absolute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AttributeDelta {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub speed: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub technique: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub physical: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub mental: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub goalkeeping: Option<u8>,
}

impl AttributeDelta {
    pub fn get(&self, attr: Attribute) -> Option<u8> {
        match attr {
            Attribute::Speed => self.speed,
            Attribute::Technique => self.technique,
            Attribute::Physical => self.physical,
            Attribute::Mental => self.mental,
            Attribute::Goalkeeping => self.goalkeeping,
        }
    }

    pub fn set(&mut self, attr: Attribute, value: u8) {
        let slot = match attr {
            Attribute::Speed => &mut self.speed,
            Attribute::Technique => &mut self.technique,
            Attribute::Physical => &mut self.physical,
            Attribute::Mental => &mut self.mental,
            Attribute::Goalkeeping => &mut self.goalkeeping,
        };
        *slot = Some(value);
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Present entries in attribute order.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, u8)> + '_ {
        Attribute::ALL.into_iter().filter_map(move |attr| self.get(attr).map(|v| (attr, v)))
    }

    pub fn apply_to(&self, attributes: &mut PlayerAttributes) {
        for (attr, value) in self.iter() {
            attributes.set(attr, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_delta_serializes_to_empty_object() {
        let delta = AttributeDelta::default();
        assert!(delta.is_empty());
        assert_eq!(serde_json::to_string(&delta).unwrap(), "{}");
    }

    #[test]
    fn test_apply_only_touches_present_fields() {
        let mut delta = AttributeDelta::default();
        delta.set(Attribute::Mental, 71);
        let mut attrs = PlayerAttributes::default();
        delta.apply_to(&mut attrs);
        assert_eq!(attrs.mental, 71);
        assert_eq!(attrs.speed, 50);
        assert_eq!(delta.len(), 1);
        assert_eq!(delta.iter().collect::<Vec<_>>(), vec![(Attribute::Mental, 71)]);
    }
}
