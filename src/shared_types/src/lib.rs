//! Generated TypeScript bindings are written to `generated/` by the build script.
