use serde::{Deserialize, Serialize};

/// Entity annotations attached to one training sentence.
///
/// Each entity is `(start, end, label)` with character offsets, serialized as
/// a three-element JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotations {
    #[serde(default)]
    pub entities: Vec<(usize, usize, String)>,
}

/// One NER training example, serialized as `[text, {"entities": [...]}]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingExample(pub String, pub Annotations);

impl TrainingExample {
    pub fn new(text: impl Into<String>, entities: Vec<(usize, usize, String)>) -> Self {
        Self(text.into(), Annotations { entities })
    }

    pub fn text(&self) -> &str {
        &self.0
    }

    pub fn entities(&self) -> &[(usize, usize, String)] {
        &self.1.entities
    }

    /// Labels present in this example, in annotation order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.1.entities.iter().map(|(_, _, label)| label.as_str())
    }
}
