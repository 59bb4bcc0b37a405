//! Standings ordering and per-track champion selection.
//!
//! Both orderings run a fixed tie-break cascade and only fall back to the
//! injected rng when every deterministic criterion is exhausted. Callers
//! are expected to run [`compute_standings_scores`] first so the Buchholz
//! fields are fresh.
//!
//! [`compute_standings_scores`]: super::buchholz::compute_standings_scores

use rand::Rng;

use crate::models::{Competitor, ScheduledMatch, Track};

/// Order competitors into aggregate standings, best first.
///
/// Cascade: points, aggregate Buchholz, aggregate dominant wins, bets
/// received (fan favorite), then a random tie-break from `rng`.
pub fn rank_standings(competitors: &[Competitor], rng: &mut impl Rng) -> Vec<Competitor> {
    let mut decorated: Vec<(Competitor, u32)> = competitors
        .iter()
        .cloned()
        .map(|c| (c, rng.gen()))
        .collect();
    decorated.sort_by(|(a, a_jitter), (b, b_jitter)| {
        b.points
            .cmp(&a.points)
            .then(b.buchholz.cmp(&a.buchholz))
            .then(b.dominant_wins.cmp(&a.dominant_wins))
            .then(b.bets_received.cmp(&a.bets_received))
            .then(a_jitter.cmp(b_jitter))
    });
    decorated.into_iter().map(|(c, _)| c).collect()
}

/// Select the champion of one track.
///
/// Cascade: track wins, track Buchholz, aggregate dominant wins (the
/// aggregate count, not the track's own — long-standing behavior kept
/// as-is), bets received, then random. If the top two are exactly tied on
/// track wins with no third competitor sharing that count and they played
/// each other in this track, the winner of that direct match takes the
/// title regardless of the rest of the cascade; a drawn or unrecorded
/// head-to-head changes nothing.
pub fn select_track_champion(
    competitors: &[Competitor],
    track: Track,
    history: &[ScheduledMatch],
    rng: &mut impl Rng,
) -> Option<Competitor> {
    if competitors.is_empty() {
        return None;
    }

    let mut decorated: Vec<(Competitor, u32)> = competitors
        .iter()
        .cloned()
        .map(|c| (c, rng.gen()))
        .collect();
    decorated.sort_by(|(a, a_jitter), (b, b_jitter)| {
        b.track(track)
            .wins
            .cmp(&a.track(track).wins)
            .then(b.track(track).buchholz.cmp(&a.track(track).buchholz))
            .then(b.dominant_wins.cmp(&a.dominant_wins))
            .then(b.bets_received.cmp(&a.bets_received))
            .then(a_jitter.cmp(b_jitter))
    });
    let ordered: Vec<Competitor> = decorated.into_iter().map(|(c, _)| c).collect();

    if let [top, second, rest @ ..] = ordered.as_slice() {
        let top_wins = top.track(track).wins;
        let exact_top_two_tie = second.track(track).wins == top_wins
            && !rest
                .first()
                .is_some_and(|third| third.track(track).wins == top_wins);
        if exact_top_two_tie {
            if let Some(winner) = head_to_head_winner(&top.name, &second.name, track, history) {
                return ordered.into_iter().find(|c| c.name == winner);
            }
        }
    }

    ordered.into_iter().next()
}

/// Winner of the direct match between `a` and `b` in `track`, if they
/// played one and it produced a decisive result.
fn head_to_head_winner(
    a: &str,
    b: &str,
    track: Track,
    history: &[ScheduledMatch],
) -> Option<String> {
    history
        .iter()
        .find(|m| m.track == track && m.involves(a) && m.involves(b))
        .and_then(|m| m.winner())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MatchOutcome;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn competitor(name: &str) -> Competitor {
        Competitor::new(name)
    }

    #[test]
    fn standings_cascade_reaches_dominant_wins() {
        // Tied on points and Buchholz; dominant wins must decide, not
        // insertion order.
        let mut a = competitor("A");
        a.points = 6;
        a.buchholz = 10;
        a.dominant_wins = 1;
        let mut b = competitor("B");
        b.points = 6;
        b.buchholz = 10;
        b.dominant_wins = 3;

        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let ranked = rank_standings(&[a, b], &mut rng);
        assert_eq!(ranked[0].name, "B");
    }

    #[test]
    fn bets_received_is_the_last_deterministic_signal() {
        let mut a = competitor("A");
        a.bets_received = 2;
        let mut b = competitor("B");
        b.bets_received = 9;

        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let ranked = rank_standings(&[a, b], &mut rng);
        assert_eq!(ranked[0].name, "B");
    }

    #[test]
    fn higher_points_beat_everything_else() {
        let mut a = competitor("A");
        a.points = 3;
        a.buchholz = 99;
        a.dominant_wins = 9;
        a.bets_received = 9;
        let mut b = competitor("B");
        b.points = 4;

        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let ranked = rank_standings(&[a, b], &mut rng);
        assert_eq!(ranked[0].name, "B");
    }

    #[test]
    fn champion_head_to_head_override_promotes_direct_winner() {
        let mut a = competitor("A");
        a.track_mut(Track::Darts).wins = 2;
        a.track_mut(Track::Darts).buchholz = 20;
        let mut b = competitor("B");
        b.track_mut(Track::Darts).wins = 2;
        b.track_mut(Track::Darts).buchholz = 5;
        let mut c = competitor("C");
        c.track_mut(Track::Darts).wins = 1;

        // B beat A directly in darts; despite A's better Buchholz, B is
        // champion.
        let mut direct = ScheduledMatch::new(Track::Darts, "A", "B", 2);
        direct.outcome = Some(MatchOutcome::Win {
            winner: "B".into(),
            dominant: false,
        });

        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let champ = select_track_champion(&[a, b, c], Track::Darts, &[direct], &mut rng).unwrap();
        assert_eq!(champ.name, "B");
    }

    #[test]
    fn no_override_when_three_share_top_wins() {
        let mut competitors: Vec<Competitor> = ["A", "B", "C"]
            .into_iter()
            .map(|n| {
                let mut c = competitor(n);
                c.track_mut(Track::Darts).wins = 2;
                c
            })
            .collect();
        competitors[0].track_mut(Track::Darts).buchholz = 30;

        let mut direct = ScheduledMatch::new(Track::Darts, "A", "B", 1);
        direct.outcome = Some(MatchOutcome::Win {
            winner: "B".into(),
            dominant: false,
        });

        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let champ =
            select_track_champion(&competitors, Track::Darts, &[direct], &mut rng).unwrap();
        // Three-way tie on wins: the cascade stands, no head-to-head.
        assert_eq!(champ.name, "A");
    }

    #[test]
    fn drawn_head_to_head_changes_nothing() {
        let mut a = competitor("A");
        a.track_mut(Track::Darts).wins = 2;
        a.track_mut(Track::Darts).buchholz = 20;
        let mut b = competitor("B");
        b.track_mut(Track::Darts).wins = 2;
        b.track_mut(Track::Darts).buchholz = 5;

        let mut direct = ScheduledMatch::new(Track::Darts, "A", "B", 2);
        direct.outcome = Some(MatchOutcome::Draw);

        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let champ = select_track_champion(&[a, b], Track::Darts, &[direct], &mut rng).unwrap();
        assert_eq!(champ.name, "A");
    }

    #[test]
    fn champion_uses_aggregate_dominant_wins() {
        // A has more dominant wins in darts itself, but B has the larger
        // aggregate count; the cascade consults the aggregate.
        let mut a = competitor("A");
        a.track_mut(Track::Darts).wins = 2;
        a.track_mut(Track::Darts).dominant_wins = 2;
        a.dominant_wins = 2;
        let mut b = competitor("B");
        b.track_mut(Track::Darts).wins = 2;
        b.track_mut(Track::Darts).dominant_wins = 0;
        b.dominant_wins = 4;
        // No head-to-head on record; a third competitor shares nothing.
        let mut c = competitor("C");
        c.track_mut(Track::Darts).wins = 0;

        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let champ = select_track_champion(&[a, b, c], Track::Darts, &[], &mut rng).unwrap();
        assert_eq!(champ.name, "B");
    }

    #[test]
    fn empty_roster_has_no_champion() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert!(select_track_champion(&[], Track::Darts, &[], &mut rng).is_none());
    }
}
