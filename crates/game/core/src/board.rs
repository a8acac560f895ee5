//! Match-state containers for a game in progress.
//!
//! Holds both players' zones (deck, hand, active slot, bench, points), whose
//! turn it is, and the match coin. Rules live elsewhere: behavior hooks
//! resolved by the content pipeline mutate this state, and the future match
//! engine drives it.

use crate::card::Card;
use crate::coin::Coin;

/// Bench slots per side.
pub const BENCH_SLOTS: usize = 3;

/// Player seat at the table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Seat {
    #[default]
    One,
    Two,
}

impl Seat {
    /// The seat across the table.
    pub fn opponent(self) -> Self {
        match self {
            Seat::One => Seat::Two,
            Seat::Two => Seat::One,
        }
    }

    fn index(self) -> usize {
        match self {
            Seat::One => 0,
            Seat::Two => 1,
        }
    }
}

/// One player's zones and score.
#[derive(Clone, Debug, Default)]
pub struct SideState {
    pub deck: Vec<Card>,
    pub hand: Vec<Card>,
    pub active: Option<Card>,
    pub bench: [Option<Card>; BENCH_SLOTS],
    pub points: u32,
}

impl SideState {
    /// Move the top deck card into the hand. Returns false on an empty deck.
    pub fn draw(&mut self) -> bool {
        match self.deck.pop() {
            Some(card) => {
                self.hand.push(card);
                true
            }
            None => false,
        }
    }

    /// Number of occupied bench slots.
    pub fn bench_count(&self) -> usize {
        self.bench.iter().filter(|slot| slot.is_some()).count()
    }

    /// Place a card on the first free bench slot. Returns false when full.
    pub fn bench_card(&mut self, card: Card) -> bool {
        match self.bench.iter_mut().find(|slot| slot.is_none()) {
            Some(slot) => {
                *slot = Some(card);
                true
            }
            None => false,
        }
    }
}

/// Full state of a match in progress.
#[derive(Clone, Debug, Default)]
pub struct MatchState {
    sides: [SideState; 2],
    turn: Seat,
    pub coin: Coin,
}

impl MatchState {
    /// Empty match with the default coin seed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty match with an explicitly seeded coin.
    pub fn seeded(coin_seed: u64) -> Self {
        Self {
            coin: Coin::seeded(coin_seed),
            ..Self::default()
        }
    }

    /// Zones and score for one seat.
    pub fn side(&self, seat: Seat) -> &SideState {
        &self.sides[seat.index()]
    }

    pub fn side_mut(&mut self, seat: Seat) -> &mut SideState {
        &mut self.sides[seat.index()]
    }

    /// Seat currently acting.
    pub fn turn(&self) -> Seat {
        self.turn
    }

    /// Hand the turn to the other seat.
    pub fn pass_turn(&mut self) {
        self.turn = self.turn.opponent();
    }

    /// Zones of the seat currently acting.
    pub fn attacker(&self) -> &SideState {
        self.side(self.turn)
    }

    pub fn attacker_mut(&mut self) -> &mut SideState {
        self.side_mut(self.turn)
    }

    /// Zones of the seat being acted against.
    pub fn defender(&self) -> &SideState {
        self.side(self.turn.opponent())
    }

    pub fn defender_mut(&mut self) -> &mut SideState {
        self.side_mut(self.turn.opponent())
    }
}
