use super::*;
use crate::algebra::*;
use crate::constraints::ConstraintRows;
use std::io::Write;
use std::time::Duration;

macro_rules! expformat {
    ($fmt:expr,$val:expr) => {
        if $val.is_finite() {
            exp_str_reformat(format!($fmt, $val))
        } else {
            format!($fmt, $val)
        }
    };
}

const RULE: &str = "-------------------------------------------------------------";

impl<T> SpaInfo<T>
where
    T: FloatT,
{
    pub(crate) fn print_banner(&mut self, settings: &SpaSettings<T>) -> std::io::Result<()> {
        if !settings.verbose {
            return Ok(());
        }
        let out = &mut self.stream;

        writeln!(out, "{RULE}")?;
        writeln!(
            out,
            "      rspa v{}  -  successive projection algorithm",
            crate::VERSION
        )?;
        writeln!(out, "{RULE}")?;
        Ok(())
    }

    pub(crate) fn print_configuration<C>(
        &mut self,
        settings: &SpaSettings<T>,
        constraints: &C,
    ) -> std::io::Result<()>
    where
        C: ConstraintRows<T> + ?Sized,
    {
        if !settings.verbose {
            return Ok(());
        }
        let out = &mut self.stream;

        let m = constraints.nconstraints();
        let neq = constraints.neq();
        let nnz: usize = (0..m).map(|k| constraints.row(k).nnz()).sum();

        writeln!(out, "\nproblem:")?;
        writeln!(out, "  variables     = {}", constraints.nvar())?;
        writeln!(out, "  constraints   = {m}")?;
        writeln!(out, "    : equality  = {neq}")?;
        writeln!(out, "    : inequality= {}", m - neq)?;
        writeln!(out, "  nnz(A)        = {nnz}")?;
        writeln!(out)?;

        writeln!(out, "settings:")?;
        writeln!(
            out,
            "  max iter = {}, tol = {:.1e}, precision: {} bit",
            settings.max_iter,
            settings.tol,
            std::mem::size_of::<T>() * 8
        )?;
        writeln!(out)?;
        Ok(())
    }

    pub(crate) fn print_status_header(&mut self, settings: &SpaSettings<T>) -> std::io::Result<()> {
        if !settings.verbose {
            return Ok(());
        }
        let out = &mut self.stream;

        writeln!(out, "iter    criterion")?;
        writeln!(out, "{RULE}")?;
        out.flush()
    }

    pub(crate) fn print_status(&mut self, settings: &SpaSettings<T>) -> std::io::Result<()> {
        if !settings.verbose {
            return Ok(());
        }
        let out = &mut self.stream;

        writeln!(
            out,
            "{:>4}    {}",
            self.iterations,
            expformat!("{:8.4e}", self.criterion)
        )
    }

    pub(crate) fn print_footer(
        &mut self,
        settings: &SpaSettings<T>,
        tol: T,
    ) -> std::io::Result<()> {
        if !settings.verbose {
            return Ok(());
        }
        let out = &mut self.stream;

        writeln!(out, "{RULE}")?;
        writeln!(out, "Terminated with status = {}", self.status)?;
        writeln!(out, "achieved tol = {}", expformat!("{:.4e}", tol))?;
        writeln!(
            out,
            "solve time = {:?}",
            Duration::from_secs_f64(self.solve_time)
        )?;
        writeln!(
            out,
            "  setup time = {:?}",
            Duration::from_secs_f64(self.setup_time)
        )?;
        out.flush()
    }
}

// Rewrites LowerExp output so that the exponent is signed and has
// at least two digits, e.g. "1.5e-3" becomes "1.5e-03".
fn exp_str_reformat(s: String) -> String {
    match s.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exp),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => s,
    }
}

#[test]
fn test_exp_str_reformat() {
    assert_eq!(exp_str_reformat("1.5e-3".to_string()), "1.5e-03");
    assert_eq!(exp_str_reformat("2.0000e12".to_string()), "2.0000e+12");
    assert_eq!(exp_str_reformat("7e-101".to_string()), "7e-101");
    assert_eq!(exp_str_reformat("NaN".to_string()), "NaN");
}
