use std::env;
use std::path::Path;

fn main() {
	println!("cargo:rerun-if-changed=linker.ld");
	println!("cargo:rerun-if-env-changed=CARGO_CFG_TARGET_OS");

	// The linker script only applies to the bare-metal image; hosted builds
	// link normally.
	if env::var("CARGO_CFG_TARGET_OS").as_deref() != Ok("none") {
		return;
	}

	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	println!("cargo:rustc-link-search=native={}", manifest_dir.display());
	println!("cargo:rustc-link-arg-bins=-Tlinker.ld");
}
