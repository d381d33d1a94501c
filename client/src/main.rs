use client::boot::{self, BootConfig};

fn main() {
    if let Err(err) = boot::start(&BootConfig::default()) {
        log::error!("startup failed: {err}");
        #[cfg(feature = "csr")]
        wasm_bindgen::throw_str(&err.to_string());
        #[cfg(not(feature = "csr"))]
        std::process::exit(1);
    }
}
