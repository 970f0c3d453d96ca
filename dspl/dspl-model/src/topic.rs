use arcstr::ArcStr;
use serde::{Deserialize, Serialize};

use crate::info::Info;

/// A node in a dataset's topic tree.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Topic {
    pub id: ArcStr,
    #[serde(default, skip_serializing_if = "Info::is_empty")]
    pub info: Info,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub child_topics: Vec<Topic>,
}

impl Topic {
    pub fn new(id: impl Into<ArcStr>) -> Self {
        Self {
            id: id.into(),
            info: Info::default(),
            child_topics: vec![],
        }
    }

    pub fn with_info(mut self, info: Info) -> Self {
        self.info = info;
        self
    }

    pub fn with_child(mut self, child: Topic) -> Self {
        self.child_topics.push(child);
        self
    }

    /// This topic and all its descendants, depth first, parents before children.
    pub fn iter_tree(&self) -> TopicTreeIter<'_> {
        TopicTreeIter { stack: vec![self] }
    }

    /// Find a topic within this subtree, including this topic.
    pub fn find(&self, id: &str) -> Option<&Topic> {
        self.iter_tree().find(|topic| topic.id.as_str() == id)
    }
}

pub struct TopicTreeIter<'a> {
    stack: Vec<&'a Topic>,
}

impl<'a> TopicTreeIter<'a> {
    pub(crate) fn forest(roots: &'a [Topic]) -> Self {
        Self {
            stack: roots.iter().rev().collect(),
        }
    }
}

impl<'a> Iterator for TopicTreeIter<'a> {
    type Item = &'a Topic;

    fn next(&mut self) -> Option<Self::Item> {
        let topic = self.stack.pop()?;
        self.stack.extend(topic.child_topics.iter().rev());
        Some(topic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids<'a>(iter: impl Iterator<Item = &'a Topic>) -> Vec<&'a str> {
        iter.map(|topic| topic.id.as_str()).collect()
    }

    #[test]
    fn depth_first_order() {
        let forest = vec![
            Topic::new("economy")
                .with_child(Topic::new("trade").with_child(Topic::new("exports")))
                .with_child(Topic::new("labor")),
            Topic::new("society"),
        ];

        assert_eq!(
            vec!["economy", "trade", "exports", "labor", "society"],
            ids(TopicTreeIter::forest(&forest))
        );
        assert_eq!(
            Some("exports"),
            forest[0].find("exports").map(|topic| topic.id.as_str())
        );
        assert!(forest[0].find("society").is_none());
    }
}
