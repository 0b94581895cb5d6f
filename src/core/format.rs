//! Locale-fixed display formatting.
//!
//! Output follows the Costa Rican convention (colón symbol, `.` grouping,
//! `,` decimals) regardless of the system locale, so rendered values are
//! reproducible in tests.

const SIMBOLO_MONEDA: &str = "₡";
const SEPARADOR_MILES: char = '.';
const SEPARADOR_DECIMAL: char = ',';

/// Formats a monetary amount with the colón symbol and no decimal places.
pub fn formatear_moneda(monto: f64) -> String {
    let redondeado = monto.round();
    let negativo = redondeado < 0.0;
    let entero = agrupar_miles(redondeado.abs() as u64);
    if negativo {
        format!("-{SIMBOLO_MONEDA}{entero}")
    } else {
        format!("{SIMBOLO_MONEDA}{entero}")
    }
}

/// Formats a percentage with one decimal place and a trailing `%`.
pub fn formatear_porcentaje(valor: f64) -> String {
    let texto = format!("{valor:.1}").replace('.', &SEPARADOR_DECIMAL.to_string());
    format!("{texto}%")
}

/// Formats a plain number with thousands grouping. The fractional part (up
/// to two digits, trailing zeros trimmed) only appears when non-integral.
pub fn formatear_numero(numero: f64) -> String {
    let negativo = numero < 0.0;
    let absoluto = numero.abs();
    let entero = absoluto.trunc() as u64;
    let fraccion = ((absoluto - absoluto.trunc()) * 100.0).round() as u64;

    let mut texto = agrupar_miles(entero);
    if fraccion > 0 && fraccion < 100 {
        let decimales = format!("{fraccion:02}");
        let decimales = decimales.trim_end_matches('0');
        texto.push(SEPARADOR_DECIMAL);
        texto.push_str(decimales);
    } else if fraccion == 100 {
        // Rounding carried into the integer part.
        texto = agrupar_miles(entero + 1);
    }
    if negativo {
        format!("-{texto}")
    } else {
        texto
    }
}

fn agrupar_miles(valor: u64) -> String {
    let digitos = valor.to_string();
    let mut salida = String::with_capacity(digitos.len() + digitos.len() / 3);
    for (i, c) in digitos.chars().enumerate() {
        if i > 0 && (digitos.len() - i) % 3 == 0 {
            salida.push(SEPARADOR_MILES);
        }
        salida.push(c);
    }
    salida
}
