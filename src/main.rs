// The browser frontend is the only consumer of these modules; host builds
// compile them for their unit tests.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod capability;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod config;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod content;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod decoration;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod error;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod interaction;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod nav;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod pointer;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod reveal;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod scope;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod telemetry;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod frontend;
#[cfg(target_arch = "wasm32")]
mod sections;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("This project is frontend-only. Run `trunk serve` or `trunk build --release`.");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}
