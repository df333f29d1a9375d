mod property;
mod receiver;
