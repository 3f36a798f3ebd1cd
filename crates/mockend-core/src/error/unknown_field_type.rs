use super::Error;
use crate::schema::FieldType;

/// A field schema names a type outside the abstract vocabulary.
#[derive(Debug)]
pub(super) struct UnknownFieldType {
    field: Box<str>,
    ty: Box<str>,
}

impl std::error::Error for UnknownFieldType {}

impl core::fmt::Display for UnknownFieldType {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unknown field type `{}` for field `{}`; expected one of ",
            self.ty, self.field
        )?;

        for (i, ty) in FieldType::ALL.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(ty.as_str())?;
        }

        Ok(())
    }
}

impl Error {
    pub fn unknown_field_type(field: impl Into<String>, ty: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnknownFieldType(UnknownFieldType {
            field: field.into().into(),
            ty: ty.into().into(),
        }))
    }

    pub fn is_unknown_field_type(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnknownFieldType(_))
    }
}
