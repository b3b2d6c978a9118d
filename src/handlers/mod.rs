pub mod catalog;
pub mod city;
pub mod moderate;
pub mod notify;
pub mod submission;
pub mod wizard;
