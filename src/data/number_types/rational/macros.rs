/// Shorthand for creating a rational number.
///
/// `R!(3)` is the integer three, `R!(3, 4)` is three quarters.
#[macro_export]
macro_rules! R {
    ($value:expr) => {
        $crate::data::number_types::rational::Rational::from_integer($value)
    };
    ($numer:expr, $denom:expr) => {
        $crate::data::number_types::rational::Rational::new($numer, $denom)
    };
}
