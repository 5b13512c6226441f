//! Debtor identity/address extraction.
//!
//! The debtor (invoice recipient) address block has to be separated
//! from supplier letterhead, bank details and legal footer text that
//! share the same document. Two strategies: the recipient block
//! conventionally precedes the invoice metadata lines (primary), and
//! otherwise the best-scoring blank-line-delimited block in the
//! document header is taken (fallback).

use tracing::debug;

use super::lines::Line;
use super::patterns::{
    contains_keyword, CONTACT_LABELED, DOCUMENT_HEADER, EMAIL, INVOICE_META_KEYWORDS,
    PERSON_NAME, PHONE, POSTAL_CITY, SEGMENT_SPLIT, STREET_INDICATORS, SUPPLIER_INDICATORS,
};
use super::score::Best;

/// Lines of recipient address collected at most this far above the
/// first invoice-metadata line.
const BACKWARD_SCAN_DEPTH: usize = 8;

/// Minimum primary-block score; below it the fallback strategy runs.
const MIN_PRIMARY_SCORE: i32 = 1;

/// Extracted debtor fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DebtorBlock {
    pub company: Option<String>,
    pub street: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
}

impl DebtorBlock {
    /// Check whether nothing was extracted.
    pub fn is_empty(&self) -> bool {
        self.company.is_none()
            && self.street.is_none()
            && self.postal_code.is_none()
            && self.city.is_none()
            && self.contact_name.is_none()
            && self.contact_email.is_none()
            && self.contact_phone.is_none()
    }
}

/// Locate the debtor block.
pub fn locate(lines: &[Line]) -> DebtorBlock {
    if let Some(block) = preceding_block(lines) {
        let (debtor, score) = score_block(&block);
        if score >= MIN_PRIMARY_SCORE && debtor.company.is_some() {
            debug!(score, "debtor block found above invoice metadata");
            return debtor;
        }
        debug!(score, "metadata-anchored block scored poorly, trying header blocks");
        if let Some(fallback) = best_header_block(lines) {
            return fallback;
        }
        return debtor;
    }

    best_header_block(lines).unwrap_or_default()
}

/// Primary strategy: walk backward from the first invoice-metadata line,
/// collecting the non-blank lines above it. A supplier-indicator line
/// ends the walk once at least one line has been collected, so supplier
/// footer text is not pulled into the block.
fn preceding_block(lines: &[Line]) -> Option<Vec<String>> {
    let anchor = lines
        .iter()
        .position(|line| contains_keyword(&line.text, INVOICE_META_KEYWORDS))?;

    let mut collected: Vec<String> = Vec::new();
    for line in lines[..anchor].iter().rev() {
        if line.is_blank() {
            continue;
        }
        if !collected.is_empty() && contains_keyword(&line.text, SUPPLIER_INDICATORS) {
            break;
        }
        collected.push(line.text.clone());
        if collected.len() == BACKWARD_SCAN_DEPTH {
            break;
        }
    }

    if collected.is_empty() {
        return None;
    }
    collected.reverse();
    Some(collected)
}

/// Fallback strategy: split everything above the first `Rechnung` /
/// `Invoice` line into blank-line blocks and keep the best-scoring one.
/// Ties keep the earliest block.
fn best_header_block(lines: &[Line]) -> Option<DebtorBlock> {
    let header_end = lines
        .iter()
        .position(|line| DOCUMENT_HEADER.is_match(&line.text))
        .unwrap_or(lines.len());

    let mut best: Best<DebtorBlock> = Best::new();
    let mut current: Vec<String> = Vec::new();

    for line in &lines[..header_end] {
        if line.is_blank() {
            offer_block(&mut best, &mut current);
        } else {
            current.push(line.text.clone());
        }
    }
    offer_block(&mut best, &mut current);

    best.into_inner().filter(|block| !block.is_empty())
}

fn offer_block(best: &mut Best<DebtorBlock>, current: &mut Vec<String>) {
    if current.is_empty() {
        return;
    }
    let (debtor, score) = score_block(current);
    // A block that scored nothing is noise; its default company name
    // must not leak into the draft.
    if score >= MIN_PRIMARY_SCORE {
        best.offer(debtor, score);
    }
    current.clear();
}

/// Score one block and extract its fields.
///
/// Segments are visited from the end of the block backward: later lines
/// are more likely city/country, earlier lines more likely the company
/// name, and the company ranking rewards distance from the block end.
fn score_block(block: &[String]) -> (DebtorBlock, i32) {
    let segments: Vec<String> = block
        .iter()
        .flat_map(|line| SEGMENT_SPLIT.split(line))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    let mut debtor = DebtorBlock::default();
    let mut score = 0;
    let mut company: Best<String> = Best::new();

    for (distance, segment) in segments.iter().rev().enumerate() {
        if contains_keyword(segment, SUPPLIER_INDICATORS) {
            score -= 4;
            continue;
        }

        if debtor.contact_email.is_none() {
            if let Some(email) = EMAIL.find(segment) {
                debtor.contact_email = Some(email.as_str().to_string());
                score += 3;
                continue;
            }
        }

        if debtor.contact_phone.is_none() {
            if let Some(phone) = PHONE.find(segment) {
                if phone.as_str().chars().filter(char::is_ascii_digit).count() >= 6 {
                    debtor.contact_phone = Some(phone.as_str().to_string());
                    score += 2;
                    continue;
                }
            }
        }

        if let Some(caps) = CONTACT_LABELED.captures(segment) {
            debtor.contact_name = Some(caps[1].trim().to_string());
            score += 3;
            continue;
        }

        if PERSON_NAME.is_match(segment) && debtor.contact_name.is_none() {
            debtor.contact_name = Some(segment.clone());
            score += 2;
            continue;
        }

        if let Some(caps) = POSTAL_CITY.captures(segment) {
            let mut filled = false;
            if debtor.postal_code.is_none() {
                debtor.postal_code = Some(caps[1].to_string());
                filled = true;
            }
            if debtor.city.is_none() {
                debtor.city = Some(caps[2].trim().to_string());
                filled = true;
            }
            if filled {
                score += 4;
            }
            continue;
        }

        if debtor.street.is_none()
            && segment.chars().any(|c| c.is_ascii_digit())
            && contains_keyword(segment, STREET_INDICATORS)
        {
            debtor.street = Some(segment.clone());
            score += 3;
            continue;
        }

        if company_shaped(segment) {
            let mut rank = 20 - distance as i32;
            if caps_initial_words(segment) {
                rank += 3;
            }
            if PERSON_NAME.is_match(segment) {
                rank -= 5;
            }
            let first_acceptance = company.get().is_none();
            if company.offer(segment.clone(), rank) && first_acceptance {
                score += 2;
            }
        }
    }

    debtor.company = company
        .into_inner()
        .or_else(|| segments.first().cloned());

    (debtor, score)
}

/// Letters-only segment that could be a company name.
fn company_shaped(segment: &str) -> bool {
    segment.chars().any(char::is_alphabetic)
        && segment
            .chars()
            .all(|c| c.is_alphabetic() || c.is_whitespace() || c == '.' || c == '&' || c == ',')
}

fn caps_initial_words(segment: &str) -> bool {
    segment
        .split_whitespace()
        .all(|word| word.chars().next().is_some_and(char::is_uppercase))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::lines::normalize;

    const GERMAN_INVOICE: &str = "\
Musterfirma GmbH
Musterstraße 1
12345 Berlin

Rechnungsnummer: RE-2024-001
Rechnungsdatum: 15.01.2024

Position 1: Beratung 119,00 EUR

Lieferanten AG • IBAN: DE02120300000000202051 • Musterbank
USt-IdNr. DE123456789";

    #[test]
    fn test_recipient_block_above_metadata() {
        let debtor = locate(&normalize(GERMAN_INVOICE));
        assert_eq!(debtor.company.as_deref(), Some("Musterfirma GmbH"));
        assert_eq!(debtor.street.as_deref(), Some("Musterstraße 1"));
        assert_eq!(debtor.postal_code.as_deref(), Some("12345"));
        assert_eq!(debtor.city.as_deref(), Some("Berlin"));
    }

    #[test]
    fn test_bank_block_never_wins() {
        // No metadata anchor, so only the fallback runs; the bank block
        // sits below the "Rechnung" header line and is never considered.
        let text = "\
Musterfirma GmbH
Musterstraße 1
12345 Berlin

Rechnung

IBAN: DE02120300000000202051 | Musterbank";
        let debtor = locate(&normalize(text));
        assert_eq!(debtor.company.as_deref(), Some("Musterfirma GmbH"));
    }

    #[test]
    fn test_supplier_footer_stops_backward_walk() {
        let text = "\
Steuernr. 12/345/67890
Empfänger AG
44801 Bochum
Kundennummer: 991";
        let debtor = locate(&normalize(text));
        assert_eq!(debtor.company.as_deref(), Some("Empfänger AG"));
        assert_eq!(debtor.city.as_deref(), Some("Bochum"));
    }

    #[test]
    fn test_contact_extraction() {
        let text = "\
Beispiel GmbH
Kontakt: Erika Musterfrau
erika@beispiel.de
Tel. 030 1234567
10115 Berlin
Kundennummer: 7";
        let debtor = locate(&normalize(text));
        assert_eq!(debtor.company.as_deref(), Some("Beispiel GmbH"));
        assert_eq!(debtor.contact_name.as_deref(), Some("Erika Musterfrau"));
        assert_eq!(debtor.contact_email.as_deref(), Some("erika@beispiel.de"));
        assert_eq!(debtor.contact_phone.as_deref(), Some("030 1234567"));
        assert_eq!(debtor.postal_code.as_deref(), Some("10115"));
    }

    #[test]
    fn test_person_name_is_not_the_company() {
        let text = "\
Max Mustermann
Beispiel GmbH
Hauptstraße 5
80331 München
Rechnungsnummer: 12";
        let debtor = locate(&normalize(text));
        assert_eq!(debtor.company.as_deref(), Some("Beispiel GmbH"));
        assert_eq!(debtor.contact_name.as_deref(), Some("Max Mustermann"));
    }

    #[test]
    fn test_empty_document() {
        assert!(locate(&normalize("")).is_empty());
        assert!(locate(&normalize("Rechnung")).is_empty());
    }
}
