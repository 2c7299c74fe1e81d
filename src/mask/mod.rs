//! Lazily evaluated masks over an [`ImageSource`](crate::ImageSource).

pub(crate) mod circular;
