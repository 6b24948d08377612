//! # Engineering Toolkit CLI
//!
//! Menu-driven terminal front-end over `calc_core`. It only parses text,
//! builds a [`CalculationItem`] and prints the outcome; all numeric work
//! happens in the library.
//!
//! Pass `--json` to echo every request and result as JSON.

mod logging;

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use calc_core::calculations::{
    parse_number_list, ColorBand, OhmsLawInput, OhmsLawMode, ParallelInput, RcFilterInput, ResistorBands,
    StatisticsInput,
};
use calc_core::self_test::run_self_test_to;
use calc_core::CalculationItem;
use tracing::{debug, warn};

const MENU: &str = "
=========================================
   ENGINEERING ASSISTANT TOOLKIT
=========================================
1. Resistor Colour Decoder
2. Circuit Analyser (Ohm's Law)
3. Signal Statistics (Mean/RMS)
4. RC Filter Calculator
5. Parallel Resistor Calc
6. Run System Self-Test
7. Exit
-----------------------------------------";

/// One interactive session over any line source and sink.
struct Session<R, W> {
    input: R,
    out: W,
    echo_json: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    fn new(input: R, out: W, echo_json: bool) -> Self {
        Self { input, out, echo_json }
    }

    /// Print `prompt` and read one trimmed line, `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.out, "{}", prompt)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Re-prompt until `parse` accepts the line.
    fn prompt_with<T, F>(&mut self, prompt: &str, parse: F) -> io::Result<Option<T>>
    where
        F: Fn(&str) -> Result<T, String>,
    {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };
            match parse(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(msg) => writeln!(self.out, "Error: {}", msg)?,
            }
        }
    }

    fn prompt_number<T: FromStr>(&mut self, prompt: &str) -> io::Result<Option<T>> {
        self.prompt_with(prompt, |s| {
            s.parse::<T>()
                .map_err(|_| "Invalid input. Please enter a number.".to_string())
        })
    }

    fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.out, "{}", MENU)?;
            let Some(choice) = self.read_line("Select an option: ")? else {
                return Ok(());
            };

            let item = match choice.parse::<u32>() {
                Ok(1) => self.resistor_decoder()?,
                Ok(2) => self.circuit_analyser()?,
                Ok(3) => self.signal_statistics()?,
                Ok(4) => self.rc_filter()?,
                Ok(5) => self.parallel_resistors()?,
                Ok(6) => {
                    run_self_test_to(&mut self.out)?;
                    continue;
                }
                Ok(7) => {
                    writeln!(self.out, "Exiting application.")?;
                    return Ok(());
                }
                _ => {
                    writeln!(self.out, "Invalid selection. Try 1-7.")?;
                    continue;
                }
            };

            match item {
                Some(item) => self.report(&item)?,
                // end of input mid-form
                None => return Ok(()),
            }
        }
    }

    fn report(&mut self, item: &CalculationItem) -> io::Result<()> {
        debug!(calc_type = item.calc_type(), "running calculation");
        match item.calculate() {
            Ok(outcome) => {
                writeln!(self.out, ">> {}", outcome.summary())?;
                if self.echo_json {
                    writeln!(self.out)?;
                    writeln!(self.out, "JSON Output:")?;
                    if let Ok(json) = serde_json::to_string_pretty(item) {
                        writeln!(self.out, "{}", json)?;
                    }
                    if let Ok(json) = serde_json::to_string_pretty(&outcome) {
                        writeln!(self.out, "{}", json)?;
                    }
                }
            }
            Err(e) => {
                warn!(code = e.error_code(), "calculation rejected");
                writeln!(self.out, "Error: {}", e)?;
                if self.echo_json {
                    if let Ok(json) = serde_json::to_string_pretty(&e) {
                        writeln!(self.out)?;
                        writeln!(self.out, "Error JSON:")?;
                        writeln!(self.out, "{}", json)?;
                    }
                }
            }
        }
        Ok(())
    }

    fn resistor_decoder(&mut self) -> io::Result<Option<CalculationItem>> {
        writeln!(self.out, "\n--- Resistor Colour Code Decoder ---")?;
        writeln!(self.out, "Codes: 0:Black, 1:Brown, 2:Red, 3:Orange, 4:Yellow,")?;
        writeln!(self.out, "       5:Green, 6:Blue, 7:Violet, 8:Grey, 9:White")?;

        let mut bands = [ColorBand::Black; 3];
        for (slot, prompt) in bands.iter_mut().zip([
            "Enter Band 1 (0-9 or colour): ",
            "Enter Band 2 (0-9 or colour): ",
            "Enter Multiplier (0-9 or colour): ",
        ]) {
            let Some(band) = self.prompt_with(prompt, |s| s.parse::<ColorBand>().map_err(|e| e.to_string()))? else {
                return Ok(None);
            };
            *slot = band;
        }

        Ok(Some(CalculationItem::Resistor(ResistorBands::from_colors(
            bands[0], bands[1], bands[2],
        ))))
    }

    fn circuit_analyser(&mut self) -> io::Result<Option<CalculationItem>> {
        writeln!(self.out, "\n--- Basic Circuit Analyser (Ohm's Law) ---")?;
        writeln!(self.out, "1. Calculate Voltage (V)")?;
        writeln!(self.out, "2. Calculate Current (I)")?;
        writeln!(self.out, "3. Calculate Resistance (R)")?;

        let Some(mode) = self.prompt_with("Select calculation (1-3): ", |s| {
            let code = s.parse::<i32>().map_err(|_| "Invalid selection.".to_string())?;
            OhmsLawMode::try_from(code).map_err(|e| e.to_string())
        })?
        else {
            return Ok(None);
        };

        let (first, second) = match mode {
            OhmsLawMode::Voltage => ("Current (A): ", "Resistance (Ohms): "),
            OhmsLawMode::Current => ("Voltage (V): ", "Resistance (Ohms): "),
            OhmsLawMode::Resistance => ("Voltage (V): ", "Current (A): "),
        };
        let Some(a) = self.prompt_number::<f64>(first)? else {
            return Ok(None);
        };
        let Some(b) = self.prompt_number::<f64>(second)? else {
            return Ok(None);
        };

        let input = match mode {
            OhmsLawMode::Voltage => OhmsLawInput::voltage(a, b),
            OhmsLawMode::Current => OhmsLawInput::current(a, b),
            OhmsLawMode::Resistance => OhmsLawInput::resistance(a, b),
        };
        Ok(Some(CalculationItem::OhmsLaw(input)))
    }

    fn signal_statistics(&mut self) -> io::Result<Option<CalculationItem>> {
        writeln!(self.out, "\n--- Signal Statistics (Mean & RMS) ---")?;
        let samples = self.prompt_with("Enter samples (comma separated): ", |s| {
            parse_number_list(s).map_err(|e| e.to_string())
        })?;
        Ok(samples.map(|samples| CalculationItem::Statistics(StatisticsInput { samples })))
    }

    fn rc_filter(&mut self) -> io::Result<Option<CalculationItem>> {
        writeln!(self.out, "\n--- RC Low-Pass Filter Calculator ---")?;
        let Some(resistance_ohm) = self.prompt_number::<f64>("Resistance (Ohms): ")? else {
            return Ok(None);
        };
        let Some(capacitance_f) = self.prompt_number::<f64>("Capacitance (Farads): ")? else {
            return Ok(None);
        };
        Ok(Some(CalculationItem::RcFilter(RcFilterInput { resistance_ohm, capacitance_f })))
    }

    fn parallel_resistors(&mut self) -> io::Result<Option<CalculationItem>> {
        writeln!(self.out, "\n--- Parallel Resistor Calculator ---")?;
        let values = self.prompt_with("Resistors in Ohms (comma separated): ", |s| {
            parse_number_list(s).map_err(|e| e.to_string())
        })?;
        Ok(values.map(|resistances_ohm| CalculationItem::Parallel(ParallelInput { resistances_ohm })))
    }
}

fn main() {
    if let Err(e) = logging::init() {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let echo_json = std::env::args().skip(1).any(|arg| arg == "--json");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), echo_json);
    if let Err(e) = session.run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
