//! Tallest / heaviest player lookup

use crate::{
    balldontlie::{ApiClient, Player, PlayerSearch},
    Result,
};

const NOT_FOUND: &str = "Not found";

/// Handle the players stats command
pub async fn handle_players_stats(client: &ApiClient, name: &str) -> Result<()> {
    let mut search = PlayerSearch::new(client.clone());

    // The second lookup is served from the search memo.
    let tallest = search.tallest(name).await?;
    let heaviest = search.heaviest(name).await?;

    println!("Tallest player: {}", tallest_info(tallest.as_ref()));
    println!("Heaviest player: {}", heaviest_info(heaviest.as_ref()));
    Ok(())
}

/// `LeBron James - 2.03 m`, or `Not found`
pub fn tallest_info(player: Option<&Player>) -> String {
    player
        .and_then(|p| {
            p.height_meters()
                .map(|m| format!("{} - {} m", p.full_name(), round2(m)))
        })
        .unwrap_or_else(|| NOT_FOUND.to_string())
}

/// `LeBron James - 113.4 kg`, or `Not found`
pub fn heaviest_info(player: Option<&Player>) -> String {
    player
        .and_then(|p| {
            p.weight_kilograms()
                .map(|kg| format!("{} - {} kg", p.full_name(), round2(kg)))
        })
        .unwrap_or_else(|| NOT_FOUND.to_string())
}

/// Two-decimal rounding; `Display` then drops trailing zeros (113.40 prints as 113.4).
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{balldontlie::Team, PlayerId, TeamId};

    fn player(height: Option<(u32, u32)>, weight_pounds: Option<u32>) -> Player {
        Player {
            id: PlayerId::new(237),
            first_name: "LeBron".to_string(),
            last_name: "James".to_string(),
            height_feet: height.map(|(f, _)| f),
            height_inches: height.map(|(_, i)| i),
            weight_pounds,
            position: "F".to_string(),
            team: Team {
                id: TeamId::new(14),
                abbreviation: "LAL".to_string(),
                city: "Los Angeles".to_string(),
                conference: "West".to_string(),
                division: "Pacific".to_string(),
                full_name: "Los Angeles Lakers".to_string(),
                name: "Lakers".to_string(),
            },
        }
    }

    #[test]
    fn test_tallest_info() {
        let p = player(Some((6, 8)), Some(250));
        assert_eq!(tallest_info(Some(&p)), "LeBron James - 2.03 m");
    }

    #[test]
    fn test_heaviest_info() {
        let p = player(Some((6, 8)), Some(250));
        assert_eq!(heaviest_info(Some(&p)), "LeBron James - 113.4 kg");
    }

    #[test]
    fn test_rounding_drops_trailing_zero() {
        let p = player(Some((7, 0)), Some(220));
        assert_eq!(tallest_info(Some(&p)), "LeBron James - 2.13 m");
        assert_eq!(round2(2.1), 2.1);
    }

    #[test]
    fn test_not_found() {
        assert_eq!(tallest_info(None), "Not found");
        assert_eq!(heaviest_info(None), "Not found");

        let unmeasured = player(None, None);
        assert_eq!(tallest_info(Some(&unmeasured)), "Not found");
        assert_eq!(heaviest_info(Some(&unmeasured)), "Not found");
    }
}
