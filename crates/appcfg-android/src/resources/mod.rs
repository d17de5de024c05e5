//! In-memory Android resource documents
//!
//! Both documents are wrapped in a `<resources>` root on disk:
//!
//! ```xml
//! <resources>
//!     <style name="AppTheme" parent="Theme.AppCompat.Light.NoActionBar">
//!         <item name="colorPrimaryDark">@color/colorPrimaryDark</item>
//!     </style>
//!     <color name="colorPrimaryDark">#654321</color>
//! </resources>
//! ```
//!
//! Mutations are additive-or-overwrite on a named entry. Groups and colors
//! are created on demand and keep their document order.

mod colors;
mod styles;
mod xml;

pub use colors::{ColorItem, ColorsDocument};
pub use styles::{ResourceGroup, ResourceItem, StyleParent, StylesDocument};
