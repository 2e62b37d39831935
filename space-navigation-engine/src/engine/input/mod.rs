/// Per-frame navigation intent written by input handlers
pub mod intent;
/// Arrow, Escape and Enter key handling
pub mod keyboard;
/// Pointer and touch picking against object hit spheres
pub mod pointer;
/// Ray-sphere intersection
pub mod ray;
