//! Macro para declarar un `Schema` sin encadenar builders a mano.
//!
//! Exportada en la raíz del crate:
//!   use patient_schema::patient_schema;

/// Declara un `Schema` con campos requeridos y, opcionalmente, opcionales.
///
/// Los tipos son variantes simples de `FieldType` (`String`, `Number`,
/// `Integer`, `Bool`, `Array`, `Object`, `Null`, `Any`).
///
/// ```ignore
/// let fancy = patient_schema! {
///     required { greeting: String, name: String, excitedness: Number }
///     optional { decoration: String }
/// };
/// ```
#[macro_export]
macro_rules! patient_schema {
    (
        required { $($r:ident : $rt:ident),* $(,)? }
        $(optional { $($o:ident : $ot:ident),* $(,)? })?
    ) => {{
        let schema = $crate::Schema::new()
            $(.required(stringify!($r), $crate::FieldType::$rt))*;
        $(
            let schema = schema
                $(.optional(stringify!($o), $crate::FieldType::$ot))*;
        )?
        schema
    }};
}
