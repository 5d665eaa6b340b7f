//! Content accepted by `append` / `prepend`.

use web_sys::{Element, Node};

use crate::El;

/// Something that can be inserted into an element.
///
/// Text is inserted as a text node, never parsed as markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
	/// Plain text.
	Text(String),
	/// An existing node (usually an element).
	Node(Node),
}

impl From<&str> for Content {
	fn from(text: &str) -> Self {
		Self::Text(text.to_string())
	}
}

impl From<String> for Content {
	fn from(text: String) -> Self {
		Self::Text(text)
	}
}

impl From<&String> for Content {
	fn from(text: &String) -> Self {
		Self::Text(text.clone())
	}
}

macro_rules! impl_numeric_content {
	($($ty:ty),* $(,)?) => {
		$(
			impl From<$ty> for Content {
				fn from(value: $ty) -> Self {
					Self::Text(value.to_string())
				}
			}
		)*
	};
}

impl_numeric_content!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<Node> for Content {
	fn from(node: Node) -> Self {
		Self::Node(node)
	}
}

impl From<Element> for Content {
	fn from(element: Element) -> Self {
		Self::Node(element.into())
	}
}

impl From<El> for Content {
	fn from(el: El) -> Self {
		Self::Node(el.into_inner().into())
	}
}

impl From<&El> for Content {
	fn from(el: &El) -> Self {
		Self::Node(el.inner().clone().into())
	}
}
