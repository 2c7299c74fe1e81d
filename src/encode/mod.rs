//! Output side: turning an [`ImageSource`](crate::ImageSource) into encoded bytes on disk.

pub(crate) mod png;
