mod health;
mod helpers;
mod login;
mod register;
