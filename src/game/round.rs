use alloc::vec::Vec;

use crate::card::Card;
use crate::compare::{Comparison, compare};
use crate::error::RoundError;
use crate::player::Player;
use crate::result::{RoundEvent, RoundOutcome, TableView};

/// A pending deal-and-compare step. Wars and suit-ups push a new context onto
/// the stack instead of recursing.
struct SubRound {
    /// Cards each player must deal before the next comparison.
    deal: usize,
    /// Whether cards come from the bottom (head) of the hand.
    from_bottom: bool,
    /// Whether the "suit up" rule can trigger on this comparison.
    suit_up_active: bool,
}

/// Resolves one top-level round, including any chain of wars and suit-ups.
///
/// Returns [`RoundOutcome::Continue`] once the spoils have been collected and
/// the game goes on, or a terminal outcome when a player runs out of cards
/// mid-deal.
pub(super) fn resolve(
    player1: &mut Player,
    player2: &mut Player,
    suit_up: bool,
    events: &mut Vec<RoundEvent>,
) -> Result<RoundOutcome, RoundError> {
    let mut pending = alloc::vec![SubRound {
        deal: 1,
        from_bottom: false,
        suit_up_active: suit_up,
    }];

    while let Some(ctx) = pending.pop() {
        for _ in 0..ctx.deal {
            if player1.has_no_cards() && player2.has_no_cards() {
                // One long chain of wars consumed every card; settle the game
                // on the cards already face up.
                return final_showdown(player1, player2);
            }
            // Running out of cards mid-deal loses the war by attrition.
            if player1.has_no_cards() {
                return Ok(RoundOutcome::Player2Wins);
            }
            if player2.has_no_cards() {
                return Ok(RoundOutcome::Player1Wins);
            }

            player1
                .play_card(ctx.from_bottom)
                .ok_or(RoundError::NoCards)?;
            player2
                .play_card(ctx.from_bottom)
                .ok_or(RoundError::NoCards)?;
        }

        let card1 = player1.last_played().ok_or(RoundError::NoCards)?;
        let card2 = player2.last_played().ok_or(RoundError::NoCards)?;

        // A deal of 4 is an ongoing war, during which suit-up cannot trigger
        // regardless of the house rule.
        let comparison = compare(card1, card2, ctx.suit_up_active && ctx.deal != 4)?;

        events.push(RoundEvent::Compared {
            comparison,
            player1: TableView::snapshot(player1),
            player2: TableView::snapshot(player2),
        });

        match comparison {
            Comparison::FirstWins => {
                let spoils = spoils_of_war(player1, player2);
                player1.collect_spoils(&spoils);
                return Ok(RoundOutcome::Continue);
            }
            Comparison::SecondWins => {
                let spoils = spoils_of_war(player1, player2);
                player2.collect_spoils(&spoils);
                return Ok(RoundOutcome::Continue);
            }
            Comparison::Tie => {
                events.push(RoundEvent::WarDeclared);
                pending.push(SubRound {
                    deal: 4,
                    from_bottom: false,
                    suit_up_active: false,
                });
            }
            Comparison::SuitMatch => {
                events.push(RoundEvent::SuitUpDeclared);
                pending.push(SubRound {
                    deal: 2,
                    from_bottom: true,
                    suit_up_active: true,
                });
            }
        }
    }

    // Every context either returns or pushes a successor, so the stack only
    // drains through a return above.
    Ok(RoundOutcome::Continue)
}

/// Settles a fully depleted game on the last cards played. Suit-up cannot
/// activate on this final hand.
fn final_showdown(player1: &Player, player2: &Player) -> Result<RoundOutcome, RoundError> {
    let card1 = player1.last_played().ok_or(RoundError::NoCards)?;
    let card2 = player2.last_played().ok_or(RoundError::NoCards)?;

    Ok(match compare(card1, card2, false)? {
        Comparison::FirstWins => RoundOutcome::Player1Wins,
        Comparison::SecondWins => RoundOutcome::Player2Wins,
        // Suit-up is disabled for this comparison, so only a rank tie remains.
        Comparison::Tie | Comparison::SuitMatch => RoundOutcome::Draw,
    })
}

/// Both players' played cards in play order, player one's first.
fn spoils_of_war(player1: &Player, player2: &Player) -> Vec<Card> {
    let mut spoils =
        Vec::with_capacity(player1.played_cards().len() + player2.played_cards().len());
    spoils.extend_from_slice(player1.played_cards());
    spoils.extend_from_slice(player2.played_cards());
    spoils
}
