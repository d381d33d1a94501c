//! One-time attachment of the component tree to the host document.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host page (`index.html`) carries a single `<div id="root">`. Startup
//! looks it up, installs the panic hook and console logger, and mounts
//! `App` under `StrictMode`. A missing mount point is an unrecoverable
//! startup failure: nothing is rendered and the error is returned to the
//! entry point.

#[cfg(test)]
#[path = "boot_test.rs"]
mod boot_test;

#[cfg(feature = "csr")]
use leptos::prelude::*;
#[cfg(feature = "csr")]
use wasm_bindgen::JsCast as _;

#[cfg(feature = "csr")]
use crate::{app::App, components::strict_mode::StrictMode};

/// Id of the element the application mounts under.
pub const MOUNT_POINT_ID: &str = "root";

/// Startup failures. All of them are fatal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MountError {
    #[error("no browser document is available")]
    NoDocument,
    #[error("mount point #{0} was not found in the document")]
    MissingMountPoint(String),
    #[error("mount point #{0} is not an HTML element")]
    NotHtmlElement(String),
    #[error("client-side rendering is not enabled in this build")]
    Unsupported,
}

/// Bootstrap options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootConfig {
    /// Id of the mount element.
    pub root_id: String,
    /// Build the tree twice and discard the first build. Development aid only.
    pub strict_mode: bool,
    /// Maximum level forwarded to the browser console.
    pub log_level: log::Level,
}

impl Default for BootConfig {
    fn default() -> Self {
        let debug = cfg!(debug_assertions);
        Self {
            root_id: MOUNT_POINT_ID.to_owned(),
            strict_mode: debug,
            log_level: if debug { log::Level::Debug } else { log::Level::Info },
        }
    }
}

/// Start the application: panic hook, logger, then mount for the lifetime of
/// the page.
///
/// # Errors
///
/// Returns a [`MountError`] when the mount point cannot be found, in which
/// case nothing has been rendered.
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
pub fn start(config: &BootConfig) -> Result<(), MountError> {
    #[cfg(feature = "csr")]
    {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(config.log_level).is_err() {
            log::debug!("console logger already installed");
        }
        mount(config)?.forget();
        log::info!("mounted under #{}", config.root_id);
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(MountError::Unsupported)
    }
}

/// Mount `App` under the configured element and hand back the unmount handle.
///
/// # Errors
///
/// Returns a [`MountError`] when the mount point is missing or is not an HTML
/// element.
#[cfg(feature = "csr")]
pub fn mount(
    config: &BootConfig,
) -> Result<leptos::mount::UnmountHandle<impl leptos::tachys::view::Mountable + use<>>, MountError> {
    let root = find_mount_point(&config.root_id)?;
    let strict = config.strict_mode;
    if strict {
        log::debug!("strict mode enabled");
    }

    Ok(leptos::mount::mount_to(root, move || {
        view! {
            <StrictMode enabled=strict>
                <App />
            </StrictMode>
        }
    }))
}

#[cfg(feature = "csr")]
fn find_mount_point(id: &str) -> Result<web_sys::HtmlElement, MountError> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or(MountError::NoDocument)?;
    let Some(element) = document.get_element_by_id(id) else {
        log::error!("mount point #{id} is missing");
        return Err(MountError::MissingMountPoint(id.to_owned()));
    };
    element
        .dyn_into::<web_sys::HtmlElement>()
        .map_err(|_| MountError::NotHtmlElement(id.to_owned()))
}
