//! Tag shorthands.
//!
//! Each function creates a detached element of one tag in the current
//! document, equivalent to [`create`](crate::create) with that tag name.

use crate::El;
use crate::error::Result;
use crate::factory::create;

macro_rules! define_element {
	($(#[$meta:meta])* $name:ident, $tag:literal) => {
		$(#[$meta])*
		pub fn $name() -> Result<El> {
			create($tag)
		}
	};
}

define_element!(
	/// Creates a `<div>` element
	///
	/// ## Example
	///
	/// ```ignore
	/// let container = div()?;
	/// container.add_class("container")?.append(p()?.set_text("Content"))?;
	/// ```
	div, "div"
);

define_element!(
	/// Creates a `<span>` element
	span, "span"
);

define_element!(
	/// Creates a `<p>` element (paragraph)
	p, "p"
);

define_element!(
	/// Creates an `<a>` element (link)
	///
	/// ## Example
	///
	/// ```ignore
	/// let link = a()?;
	/// link.set_attr("href", "/about")?.set_text("About");
	/// ```
	a, "a"
);

define_element!(
	/// Creates a `<button>` element
	button, "button"
);

define_element!(
	/// Creates an `<input>` element
	input, "input"
);

define_element!(
	/// Creates an `<img>` element
	img, "img"
);

define_element!(
	/// Creates a `<ul>` element (unordered list)
	ul, "ul"
);

define_element!(
	/// Creates an `<li>` element (list item)
	li, "li"
);

define_element!(
	/// Creates a `<form>` element
	form, "form"
);

define_element!(
	/// Creates a `<label>` element
	label, "label"
);

define_element!(
	/// Creates a `<select>` element
	select, "select"
);

define_element!(
	/// Creates an `<option>` element
	option, "option"
);

define_element!(
	/// Creates a `<textarea>` element
	textarea, "textarea"
);

define_element!(
	/// Creates an `<h1>` element
	h1, "h1"
);

define_element!(
	/// Creates an `<h2>` element
	h2, "h2"
);

define_element!(
	/// Creates an `<h3>` element
	h3, "h3"
);
