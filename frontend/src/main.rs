//! Entry point for the WASM application

use footer_frontend::mount;

pub fn main() {
    mount();
}
