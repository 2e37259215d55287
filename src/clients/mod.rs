pub mod cheapshark;
