pub mod auction;
pub mod call;
pub mod card;
pub mod hand;
pub mod rank;
pub mod seat;
pub mod strain;
pub mod suit;

pub use auction::{Auction, CallRecord};
pub use call::Call;
pub use card::Card;
pub use hand::{Hand, Shape};
pub use rank::Rank;
pub use seat::{Seat, Side, Vulnerability};
pub use strain::Strain;
pub use suit::Suit;
