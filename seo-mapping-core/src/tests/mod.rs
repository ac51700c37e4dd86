mod integration;
mod proptest;
