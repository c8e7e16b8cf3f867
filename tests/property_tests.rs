//! Property tests over arbitrary seeds and player counts.

use proptest::prelude::*;

use rust_dalmuti::core::{GameRng, GameState, Move, Rank, RankCounts, Style};

fn styles(players: usize) -> Vec<Style> {
    vec![Style::Balanced; players]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn deal_covers_full_deck(players in 2usize..=8, seed in any::<u64>()) {
        let state = GameState::new(&styles(players), seed).unwrap();
        let dealt = state.cards_in_hands();

        prop_assert_eq!(dealt.total(), 80);
        for rank in Rank::naturals() {
            prop_assert_eq!(dealt.get(rank), rank.value());
        }
        prop_assert_eq!(dealt.get(Rank::JOKER), 2);
        prop_assert!(state.table().is_empty());
        prop_assert!(!state.is_game_over());
    }

    #[test]
    fn random_play_is_sound_and_terminates(players in 2usize..=8, seed in any::<u64>()) {
        let mut state = GameState::new(&styles(players), seed).unwrap();
        let mut rng = GameRng::new(seed ^ 0x5eed);
        let mut turns = 0u32;

        while !state.is_game_over() {
            prop_assert!(turns < 5_000, "game did not end");

            let player = state.turn_index();
            let moves = state.legal_moves();
            prop_assert!(!moves.is_empty());
            for mv in &moves {
                if let Move::Play { rank, count } = *mv {
                    prop_assert!(state.is_valid_move(player, rank, count));
                }
            }

            let mv = *rng.choose(&moves).unwrap();
            let before = state.hand(player).len();
            state.apply(mv);

            match mv {
                Move::Play { count, .. } => {
                    prop_assert_eq!(state.hand(player).len(), before - count as usize);
                    if state.hand(player).is_empty() {
                        prop_assert!(state.is_game_over());
                        prop_assert_eq!(state.winner_index(), Some(player));
                        prop_assert_eq!(state.turn_index(), player);
                    }
                }
                Move::Pass => prop_assert_eq!(state.hand(player).len(), before),
            }

            // Cards never appear or vanish.
            let accounted = state.cards_in_hands().union(&state.discarded());
            prop_assert_eq!(accounted, RankCounts::full_deck());
            turns += 1;
        }

        prop_assert!(state.winner_index().is_some());
    }

    #[test]
    fn clone_never_aliases(players in 2usize..=8, seed in any::<u64>()) {
        let state = GameState::new(&styles(players), seed).unwrap();
        let mut copy = state.clone();
        let mv = copy.legal_moves()[0];
        copy.apply(mv);

        prop_assert_eq!(state.cards_in_hands(), RankCounts::full_deck());
        prop_assert!(state.table().is_empty());
    }
}
