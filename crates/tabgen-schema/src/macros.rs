/// Declare a struct together with its [`Record`](crate::Record) descriptor.
///
/// Every field ends with a bracketed tag group:
/// - `[db = "...", gen = "..."]` attaches raw tags (any `key = "value"` pairs),
/// - `[embed]` flattens the field's type, which must itself implement `Record`,
/// - `[]` declares a field without tags (it produces no column).
///
/// ```
/// use tabgen_schema::{Record, TypeDescriptor, record};
///
/// record! {
///     #[derive(Debug, Default)]
///     pub struct TimestampsModel {
///         pub created: i64 [db = "created"],
///     }
/// }
///
/// record! {
///     #[derive(Debug, Default)]
///     pub struct PostModel {
///         /// Surrogate key.
///         pub id: u64 [db = "id", gen = "pk,ai,unsigned"],
///         pub stamps: TimestampsModel [embed],
///     }
/// }
///
/// let post = PostModel::descriptor();
/// assert_eq!(post.fields()[0].type_name(), "u64");
/// assert_eq!(post.fields()[1].embedded_record().unwrap().name(), "TimestampsModel");
/// ```
#[macro_export]
macro_rules! record {
    (@field $field:ident, $ty:ty, embed) => {
        $crate::FieldDescriptor::embedded(
            stringify!($field),
            <$ty as $crate::Record>::descriptor(),
        )
    };
    (@field $field:ident, $ty:ty, $($key:ident = $value:literal),* $(,)?) => {
        $crate::FieldDescriptor::new(stringify!($field), stringify!($ty))
            $(.with_tag(stringify!($key), $value))*
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $ty:ty [ $($tag:tt)* ]
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $ty,
            )*
        }

        impl $crate::Record for $name {
            fn descriptor() -> $crate::RecordDef {
                #[allow(unused_mut)]
                let mut record = $crate::RecordDef::new(stringify!($name));
                $(
                    record.push_field($crate::record!(@field $field, $ty, $($tag)*));
                )*
                record
            }
        }
    };
}
