use cfg_if::cfg_if;

pub(crate) mod soft;

cfg_if! {
    if #[cfg(feature = "simd")] {
        pub(crate) mod simd;
    }
}
