//! Fixture generation for a round-robin tournament.
//!
//! # Algorithm
//!
//! Walk every ordered pair of roster indices `(a, b)`, `a != b`. The
//! pair produces a game hosted by team `b` when `a < b` or the two
//! teams play in different cities. Two teams from different cities thus
//! meet twice (once per city); two teams sharing a city meet once.
//!
//! The emission order (outer `a` ascending, inner `b` ascending) is part
//! of the contract: the packer consumes games in this order and the
//! final calendar depends on it.

use crate::domain::model::{Game, Roster};

/// Builds the full set of fixtures for the roster, in deterministic
/// order.
pub fn generate_games(roster: &Roster) -> Vec<Game> {
    let teams = &roster.teams;
    let mut games = Vec::new();

    for a in 0..teams.len() {
        for b in 0..teams.len() {
            if a == b {
                continue;
            }
            // Same-city pairs only get the a < b direction, so a shared
            // city never yields a double fixture.
            if a > b && teams[a].city == teams[b].city {
                continue;
            }
            games.push(Game {
                home: teams[b].name.clone(),
                away: teams[a].name.clone(),
                city: teams[b].city.clone(),
            });
        }
    }

    games
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Team;

    fn team(name: &str, city: &str) -> Team {
        Team {
            name: name.to_string(),
            city: city.to_string(),
        }
    }

    fn pair_count(games: &[Game], x: &str, y: &str) -> usize {
        games
            .iter()
            .filter(|g| {
                (g.home == x && g.away == y) || (g.home == y && g.away == x)
            })
            .count()
    }

    #[test]
    fn different_cities_meet_twice_same_city_once() {
        let roster = Roster::new(vec![
            team("A", "Москва"),
            team("B", "Москва"),
            team("C", "Казань"),
        ]);
        let games = generate_games(&roster);

        assert_eq!(pair_count(&games, "A", "B"), 1);
        assert_eq!(pair_count(&games, "A", "C"), 2);
        assert_eq!(pair_count(&games, "B", "C"), 2);
        assert_eq!(games.len(), 5);
    }

    #[test]
    fn no_team_plays_itself() {
        let roster = Roster::new(vec![team("A", "X"), team("B", "Y")]);
        let games = generate_games(&roster);
        assert!(games.iter().all(|g| g.home != g.away));
    }

    #[test]
    fn game_is_hosted_by_later_team() {
        let roster = Roster::new(vec![team("A", "X"), team("B", "Y")]);
        let games = generate_games(&roster);

        assert_eq!(games.len(), 2);
        // a=0, b=1 first: hosted by B in Y.
        assert_eq!(games[0].home, "B");
        assert_eq!(games[0].away, "A");
        assert_eq!(games[0].city, "Y");
        // a=1, b=0 second: the return fixture in X.
        assert_eq!(games[1].home, "A");
        assert_eq!(games[1].away, "B");
        assert_eq!(games[1].city, "X");
    }

    #[test]
    fn generation_order_is_stable() {
        let roster = Roster::new(vec![
            team("A", "X"),
            team("B", "X"),
            team("C", "Y"),
            team("D", "Y"),
        ]);
        let games = generate_games(&roster);
        let cities: Vec<&str> = games.iter().map(|g| g.city.as_str()).collect();

        assert_eq!(games.len(), 10);
        assert_eq!(cities, vec!["X", "Y", "Y", "Y", "Y", "X", "X", "Y", "X", "X"]);
    }

    #[test]
    fn empty_roster_yields_no_games() {
        let games = generate_games(&Roster::default());
        assert!(games.is_empty());
    }
}
