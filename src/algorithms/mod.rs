// private sub-module defined in other files
mod lzw;

// exports identifiers from private sub-modules in the current module namespace
pub use self::lzw::lzw_decode;
pub use self::lzw::lzw_encode;
pub use self::lzw::CompressionError;
pub use self::lzw::CODE_BYTES;
pub use self::lzw::MAX_DICT_ENTRIES;
