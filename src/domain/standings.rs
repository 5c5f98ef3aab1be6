use serde::Serialize;
use std::cmp::Reverse;

use super::models::Standing;

/// Standings ordered by wins (descending), ties broken by ascending player id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Standings {
    entries: Vec<Standing>,
}

impl Standings {
    pub fn new(mut entries: Vec<Standing>) -> Self {
        entries.sort_by_key(|s| (Reverse(s.wins), s.id));
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Standing> {
        self.entries.get(index)
    }

    pub fn find(&self, id: super::PlayerId) -> Option<&Standing> {
        self.entries.iter().find(|s| s.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Standing> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[Standing] {
        &self.entries
    }
}

impl<'a> IntoIterator for &'a Standings {
    type Item = &'a Standing;
    type IntoIter = std::slice::Iter<'a, Standing>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_by_wins_descending() {
        let standings = Standings::new(vec![
            Standing::new(1, "A", 0, 2),
            Standing::new(2, "B", 2, 2),
            Standing::new(3, "C", 1, 2),
        ]);

        let ids: Vec<_> = standings.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
        assert!(
            standings
                .as_slice()
                .windows(2)
                .all(|w| w[0].wins >= w[1].wins)
        );
    }

    #[test]
    fn test_ties_broken_by_id() {
        let standings = Standings::new(vec![
            Standing::new(7, "G", 1, 1),
            Standing::new(3, "C", 1, 1),
            Standing::new(5, "E", 1, 1),
        ]);

        let ids: Vec<_> = standings.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![3, 5, 7]);
    }

    #[test]
    fn test_losses() {
        let standing = Standing::new(1, "A", 3, 5);
        assert_eq!(standing.losses(), 2);
    }

    #[test]
    fn test_find() {
        let standings = Standings::new(vec![Standing::new(4, "D", 0, 0)]);
        assert_eq!(standings.find(4).map(|s| s.name.as_str()), Some("D"));
        assert!(standings.find(5).is_none());
    }
}
