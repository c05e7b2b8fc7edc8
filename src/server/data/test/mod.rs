mod assignment;
mod booking;
mod farmer;
mod impact;
mod ingredient;
mod invite;
mod login_code;
mod payout;
mod story;
mod user;
