use anyhow::Result;
use crux_core::typegen::TypeGen;
use std::path::PathBuf;
use wifi_prov_core::{
    events::{ScanEvent, SelectionEvent, UiEvent},
    types::{ControlOrigin, FetchError, ScanState},
    App, NavigationOperation,
};

fn main() -> Result<()> {
    println!("cargo:rerun-if-changed=../app");

    let mut gen = TypeGen::new();

    gen.register_app::<App>()?;

    // Explicitly register domain event enums to ensure all variants are traced
    gen.register_type::<ScanEvent>()?;
    gen.register_type::<SelectionEvent>()?;
    gen.register_type::<UiEvent>()?;

    // Explicitly register other enums to ensure all variants are traced
    gen.register_type::<ScanState>()?;
    gen.register_type::<FetchError>()?;
    gen.register_type::<ControlOrigin>()?;
    gen.register_type::<NavigationOperation>()?;

    let output_root = PathBuf::from("./generated");

    gen.typescript("shared_types", output_root.join("typescript"))?;

    Ok(())
}
