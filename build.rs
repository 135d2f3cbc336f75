//! Build script for the invoice gateway.
//!
//! Compiles `proto/invoice.proto` into the prost messages and the tonic
//! client/server for `invoice.InvoiceService`. The output lands in
//! `$OUT_DIR/invoice.rs` and is pulled in by `src/domains/invoices/proto.rs`.
//!
//! A system `protoc` is used when `PROTOC` is set; otherwise the vendored
//! binary from `protoc-bin-vendored` is used.

use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let manifest_dir = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR")?);
    let proto_root = manifest_dir.join("proto");
    let proto_file = proto_root.join("invoice.proto");

    if !proto_file.exists() {
        panic!("Proto file not found: {:?}", proto_file);
    }

    if std::env::var_os("PROTOC").is_none() {
        let protoc = protoc_bin_vendored::protoc_bin_path()?;
        // Build scripts are single-threaded at this point.
        unsafe {
            std::env::set_var("PROTOC", protoc);
        }
    }

    tonic_prost_build::configure()
        .build_client(true)
        // The server half backs the loopback tests of the gRPC client.
        .build_server(true)
        .build_transport(true)
        .emit_rerun_if_changed(true)
        .compile_protos(&[proto_file], std::slice::from_ref(&proto_root))?;

    println!("cargo:rerun-if-changed={}", proto_root.display());

    Ok(())
}
