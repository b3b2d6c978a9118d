pub mod catalog;
pub mod city;
pub mod email;
pub mod intake;
pub mod moderation;
pub mod upload;
