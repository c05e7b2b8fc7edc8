mod assignment;
mod auth;
mod booking;
mod impact;
mod ingredient;
mod invite;
mod matching;
mod partner;
mod payout;
mod story;
