mod scanner;

pub use scanner::WalkdirIconScanner;
