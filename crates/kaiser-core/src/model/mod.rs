pub mod bid;
pub mod bidding;
pub mod card;
pub mod deck;
pub mod hand;
pub mod passing;
pub mod rank;
pub mod score;
pub mod seat;
pub mod suit;
pub mod tally;
pub mod trick;
pub mod turn;
