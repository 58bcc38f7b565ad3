fn main() {
    multiversx_sc_meta_lib::cli_main::<level_pool::AbiProvider>();
}
