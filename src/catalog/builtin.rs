//! Builtin genre data — the four shipped genres.

use super::{GenreRecord, TempoRange};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The builtin genre records, in display order.
pub fn genres() -> Vec<GenreRecord> {
    vec![
        GenreRecord {
            id: "classical".into(),
            name: "Classical Ballet".into(),
            suggested_moves: strings(&[
                "Pirouette (controlled turns)",
                "Grand Jeté (leaps)",
                "Port de Bras (arm movements)",
                "Plié (knee bends)",
                "Arabesque (balanced poses)",
            ]),
            cultural_context: "Developed in the Italian Renaissance courts and refined in \
                France and Russia, classical ballet represents the epitome of formal dance \
                structure."
                .into(),
            emotional_expression: "Combines technical precision with artistic grace, \
                expressing emotions through refined and controlled movements"
                .into(),
            technical_elements: strings(&[
                "Five basic positions",
                "Turnout of the legs",
                "Extended lines",
                "Balance and control",
                "Pointed feet",
            ]),
            music_style: "Classical orchestral compositions with structured rhythms and \
                clear musical phrases"
                .into(),
            tempo_range: TempoRange {
                min: 60.0,
                max: 120.0,
                optimal: 90.0,
            },
        },
        GenreRecord {
            id: "hiphop".into(),
            name: "Hip-Hop Dance".into(),
            suggested_moves: strings(&[
                "Top Rock (foundational moves)",
                "Breaking (floor work)",
                "Popping (muscle contractions)",
                "Locking (quick movements)",
                "House steps (footwork)",
            ]),
            cultural_context: "Emerged from African-American and Latino communities in the \
                Bronx during the 1970s as part of hip-hop culture"
                .into(),
            emotional_expression: "Raw energy and individual expression, often telling \
                stories of urban life and personal struggle"
                .into(),
            technical_elements: strings(&[
                "Groove and bounce",
                "Isolations",
                "Floor work",
                "Freestyle ability",
                "Body control",
            ]),
            music_style: "Hip-hop music with strong beats, breaks, and rhythmic patterns".into(),
            tempo_range: TempoRange {
                min: 85.0,
                max: 115.0,
                optimal: 95.0,
            },
        },
        GenreRecord {
            id: "contemporary".into(),
            name: "Contemporary".into(),
            suggested_moves: strings(&[
                "Contract and release",
                "Floor work sequences",
                "Improvisation",
                "Fall and recovery",
                "Movement combinations",
            ]),
            cultural_context: "Evolved from modern dance in the mid-20th century, breaking \
                traditional dance conventions"
                .into(),
            emotional_expression: "Deep emotional storytelling through abstract and natural \
                movements"
                .into(),
            technical_elements: strings(&[
                "Core strength",
                "Floor work",
                "Partner work",
                "Improvisation",
                "Spatial awareness",
            ]),
            music_style: "Varies from classical to electronic, often using unconventional \
                rhythms and silence"
                .into(),
            tempo_range: TempoRange {
                min: 60.0,
                max: 140.0,
                optimal: 100.0,
            },
        },
        GenreRecord {
            id: "latin".into(),
            name: "Latin Dance".into(),
            suggested_moves: strings(&[
                "Basic step patterns",
                "Hip movements",
                "Partner work",
                "Turns and spins",
                "Body isolation",
            ]),
            cultural_context: "Originated from various Latin American countries, each with \
                unique styles and traditions"
                .into(),
            emotional_expression: "Passionate and energetic expression of joy, romance, and \
                celebration"
                .into(),
            technical_elements: strings(&[
                "Hip movement",
                "Partner connection",
                "Rhythm timing",
                "Body isolation",
                "Footwork patterns",
            ]),
            music_style: "Latin music styles including salsa, bachata, merengue, and cha-cha"
                .into(),
            tempo_range: TempoRange {
                min: 150.0,
                max: 220.0,
                optimal: 180.0,
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_genre_has_moves_and_elements() {
        for genre in genres() {
            assert!(!genre.suggested_moves.is_empty(), "{}", genre.id);
            assert!(!genre.technical_elements.is_empty(), "{}", genre.id);
            assert!(!genre.cultural_context.is_empty(), "{}", genre.id);
        }
    }

    #[test]
    fn ids_are_unique() {
        let list = genres();
        for (i, genre) in list.iter().enumerate() {
            assert!(!list[..i].iter().any(|g| g.id == genre.id));
        }
    }
}
