pub mod rugcheck;
