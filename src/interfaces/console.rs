use crate::application::shop::Checkout;
use crate::domain::catalog::Catalog;
use crate::domain::order::Order;
use std::io::{self, BufRead, Write};

/// Payment method used when input ends before one is entered.
pub const DEFAULT_PAYMENT_METHOD: &str = "Cash";

/// Interactive session over a line-oriented input and a text output.
///
/// Generic over the streams so the whole dialogue can be driven from byte
/// buffers in tests.
pub struct Console<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, message: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.output, "{}", message.as_ref())
    }

    pub fn show_catalog(&mut self, catalog: &Catalog) -> io::Result<()> {
        writeln!(self.output, "\n----- AVAILABLE CLOTHES -----")?;
        for item in catalog.list_items() {
            match &item.section {
                Some(section) => writeln!(
                    self.output,
                    "{}. {} ({}) - Rs {}",
                    item.id, item.name, section, item.base_price
                )?,
                None => writeln!(self.output, "{}. {} - Rs {}", item.id, item.name, item.base_price)?,
            }
        }
        Ok(())
    }

    /// Prompts for product numbers until `0` or end of input.
    ///
    /// Unknown ids and anything that is not a number are answered with
    /// `Invalid choice.` and the prompt repeats. Returns how many items were
    /// added.
    pub fn select_items(&mut self, catalog: &Catalog, order: &mut Order) -> io::Result<usize> {
        let mut added = 0;
        loop {
            self.prompt("\nEnter product number (0 to finish): ")?;
            let Some(line) = self.read_line()? else {
                break;
            };

            match line.trim().parse::<u32>() {
                Ok(0) => break,
                Ok(id) => match catalog.find(id) {
                    Some(item) => {
                        writeln!(self.output, "{} added.", item.name)?;
                        order.add_item(item);
                        added += 1;
                    }
                    None => writeln!(self.output, "Invalid choice.")?,
                },
                Err(_) => writeln!(self.output, "Invalid choice.")?,
            }
        }
        Ok(added)
    }

    /// Prompts for the payment method and returns the first word entered.
    pub fn read_payment_method(&mut self) -> io::Result<String> {
        self.prompt("Enter payment method (Cash/Online): ")?;
        while let Some(line) = self.read_line()? {
            if let Some(word) = line.split_whitespace().next() {
                return Ok(word.to_string());
            }
        }
        Ok(DEFAULT_PAYMENT_METHOD.to_string())
    }

    pub fn report_checkout(&mut self, checkout: &Checkout) -> io::Result<()> {
        match &checkout.payment {
            Ok(receipt) => writeln!(
                self.output,
                "Payment successful: Rs {} via {}",
                receipt.amount, receipt.method
            )?,
            Err(_) => writeln!(self.output, "Invalid payment amount!")?,
        }
        if checkout.logged {
            writeln!(self.output, "Order saved to file.")
        } else {
            writeln!(self.output, "File handling error.")
        }
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::money::Money;
    use crate::domain::payment::PaymentProcessor;
    use crate::error::PaymentError;
    use rust_decimal_macros::dec;

    fn session(input: &str) -> Console<&[u8], Vec<u8>> {
        Console::new(input.as_bytes(), Vec::new())
    }

    fn transcript(console: Console<&[u8], Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_show_catalog() {
        let mut console = session("");
        console.show_catalog(&Catalog::clothing()).unwrap();

        let out = transcript(console);
        assert!(out.contains("----- AVAILABLE CLOTHES -----"));
        assert!(out.contains("1. Boys T-Shirt (Boys) - Rs 1200.00"));
        assert!(out.contains("6. Girls Top (Girls) - Rs 1500.00"));
    }

    #[test]
    fn test_select_items_until_sentinel() {
        let catalog = Catalog::clothing();
        let mut order = Order::new(1);
        let mut console = session("1\n9\nabc\n4\n0\n5\n");

        let added = console.select_items(&catalog, &mut order).unwrap();
        assert_eq!(added, 2);
        assert_eq!(order.total(), Money::new(dec!(7200)));

        let out = transcript(console);
        assert!(out.contains("Boys T-Shirt added."));
        assert!(out.contains("Girls Saree added."));
        assert_eq!(out.matches("Invalid choice.").count(), 2);
        assert!(!out.contains("Boys Jacket added."));
    }

    #[test]
    fn test_select_items_stops_at_end_of_input() {
        let catalog = Catalog::clothing();
        let mut order = Order::new(1);
        let mut console = session("2");

        assert_eq!(console.select_items(&catalog, &mut order).unwrap(), 1);
    }

    #[test]
    fn test_read_payment_method() {
        let mut console = session("\n  Online please\n");
        assert_eq!(console.read_payment_method().unwrap(), "Online");

        let mut console = session("");
        assert_eq!(console.read_payment_method().unwrap(), "Cash");
    }

    #[test]
    fn test_report_checkout() {
        let mut console = session("");
        let checkout = Checkout {
            payment: PaymentProcessor::new().make_payment(dec!(7200), "Cash"),
            logged: true,
        };
        console.report_checkout(&checkout).unwrap();

        let checkout = Checkout {
            payment: Err(PaymentError::InvalidAmount(dec!(0))),
            logged: false,
        };
        console.report_checkout(&checkout).unwrap();

        let out = transcript(console);
        assert!(out.contains("Payment successful: Rs 7200.00 via Cash"));
        assert!(out.contains("Order saved to file."));
        assert!(out.contains("Invalid payment amount!"));
        assert!(out.contains("File handling error."));
    }
}
