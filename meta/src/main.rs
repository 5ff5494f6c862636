fn main() {
    multiversx_sc_meta_lib::cli_main::<funding_governance::AbiProvider>();
}
