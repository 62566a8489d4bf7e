pub mod mfds;
pub mod mhlw;
