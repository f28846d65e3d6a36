// Adapters layer: concrete implementations of the domain ports.

pub mod codec;
pub mod http;
pub mod navigation;

pub use codec::SerdeJsonCodec;
pub use http::ReqwestTransport;
pub use navigation::MemoryNavigator;
