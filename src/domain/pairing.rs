use super::models::Pairing;
use super::standings::Standings;
use crate::errors::PairingError;

/// Pairs each player with their neighbour in the standings: (0, 1), (2, 3), ...
///
/// No pairing history is consulted, so the same two players meet again
/// whenever their win counts stay adjacent.
pub fn swiss_pairings(standings: &Standings) -> Result<Vec<Pairing>, PairingError> {
    if standings.len() % 2 != 0 {
        return Err(PairingError::OddPlayerCount(standings.len()));
    }

    let pairings = standings
        .as_slice()
        .chunks_exact(2)
        .map(|pair| Pairing::between(&pair[0], &pair[1]))
        .collect();

    Ok(pairings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Standing;

    #[test]
    fn test_pairs_adjacent_players() {
        let standings = Standings::new(vec![
            Standing::new(1, "A", 1, 1),
            Standing::new(2, "B", 1, 1),
            Standing::new(3, "C", 0, 1),
            Standing::new(4, "D", 0, 1),
        ]);

        let pairings = swiss_pairings(&standings).unwrap();

        assert_eq!(
            pairings,
            vec![
                Pairing {
                    first_id: 1,
                    first_name: "A".to_string(),
                    second_id: 2,
                    second_name: "B".to_string(),
                },
                Pairing {
                    first_id: 3,
                    first_name: "C".to_string(),
                    second_id: 4,
                    second_name: "D".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_empty_standings() {
        let pairings = swiss_pairings(&Standings::default()).unwrap();
        assert!(pairings.is_empty());
    }

    #[test]
    fn test_odd_count_is_an_error() {
        let standings = Standings::new(vec![
            Standing::new(1, "A", 0, 0),
            Standing::new(2, "B", 0, 0),
            Standing::new(3, "C", 0, 0),
        ]);

        assert_eq!(
            swiss_pairings(&standings),
            Err(PairingError::OddPlayerCount(3))
        );
    }
}
