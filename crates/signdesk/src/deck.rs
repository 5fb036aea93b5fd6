//! Flashcard training deck for signdesk.
//!
//! The deck covers the project-management standard operating procedure and
//! is hardcoded, like the document catalog: the dataset is embedded as JSON
//! and parsed once at load. Navigation is plain index arithmetic with no
//! wrap-around, matching how the original study tool behaved at either end
//! of the deck.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A single question/answer card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    /// The prompt shown first.
    pub question: String,
    /// The answer revealed on request.
    pub answer: String,
}

/// An ordered deck of flashcards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Flashcard>,
}

impl Deck {
    /// Load the built-in project-management SOP deck.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded dataset fails to parse.
    pub fn builtin() -> Result<Self> {
        let cards: Vec<Flashcard> = serde_json::from_str(DECK_JSON)?;
        Ok(Self { cards })
    }

    /// Build a deck from the given cards.
    #[must_use]
    pub fn new(cards: Vec<Flashcard>) -> Self {
        Self { cards }
    }

    /// Number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// All cards, in deck order.
    #[must_use]
    pub fn cards(&self) -> &[Flashcard] {
        &self.cards
    }

    /// Get a card by zero-based index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Flashcard> {
        self.cards.get(index)
    }

    /// Start a cursor at the first card.
    #[must_use]
    pub fn cursor(&self) -> DeckCursor<'_> {
        DeckCursor {
            deck: self,
            index: 0,
            revealed: false,
        }
    }
}

/// Navigation state over a deck.
///
/// Tracks the current card and whether its answer is revealed. Moving to a
/// neighboring card always hides the answer again.
#[derive(Debug, Clone)]
pub struct DeckCursor<'a> {
    deck: &'a Deck,
    index: usize,
    revealed: bool,
}

impl<'a> DeckCursor<'a> {
    /// The card the cursor is on.
    ///
    /// Returns `None` only for an empty deck.
    #[must_use]
    pub fn current(&self) -> Option<&'a Flashcard> {
        self.deck.get(self.index)
    }

    /// Whether the current card's answer is revealed.
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Reveal the current card's answer.
    pub fn reveal(&mut self) {
        self.revealed = true;
    }

    /// Hide the current card's answer.
    pub fn hide(&mut self) {
        self.revealed = false;
    }

    /// Toggle answer visibility.
    pub fn toggle(&mut self) {
        self.revealed = !self.revealed;
    }

    /// Advance to the next card, hiding the answer.
    ///
    /// Returns `false` (and stays put) when already on the last card.
    pub fn next(&mut self) -> bool {
        if self.index + 1 < self.deck.len() {
            self.index += 1;
            self.revealed = false;
            true
        } else {
            false
        }
    }

    /// Move to the previous card, hiding the answer.
    ///
    /// Returns `false` (and stays put) when already on the first card.
    pub fn prev(&mut self) -> bool {
        if self.index > 0 {
            self.index -= 1;
            self.revealed = false;
            true
        } else {
            false
        }
    }

    /// One-based position and deck size, as presented to users
    /// ("Card 3 of 60").
    #[must_use]
    pub fn position(&self) -> (usize, usize) {
        let total = self.deck.len();
        if total == 0 {
            (0, 0)
        } else {
            (self.index + 1, total)
        }
    }

    /// Fraction of the deck covered so far, in `0.0..=1.0`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f64 {
        let (current, total) = self.position();
        if total == 0 {
            0.0
        } else {
            current as f64 / total as f64
        }
    }
}

/// The embedded SOP training dataset.
const DECK_JSON: &str = r#"[
  {"question": "What is the crucial first step after being awarded a contract or purchase order?", "answer": "To conduct a thorough examination of the contract or purchase order."},
  {"question": "If a significant time gap exists between a bid and contract award, what financial aspect must be reassessed?", "answer": "Potential increases in material and labor costs."},
  {"question": "What are the two 'Primary Verification Items' to check in a newly awarded contract?", "answer": "The Contract Amount and the Scope of Work, ensuring they match the original bid."},
  {"question": "What three key pieces of contact information should be collected during the contract review?", "answer": "Contact info for the Project Manager, Job Site Superintendent, and Billing/Accounting."},
  {"question": "According to the 'PRO TIP' in Chapter 1, when should you consult with the GC's Project Manager about your signage scope?", "answer": "Before the contract or purchase order is executed (signed)."},
  {"question": "What is the 'Key Business Advisory' regarding your original bid when finalizing a contract?", "answer": "Request to have your original bid amended to the Contract and or Purchase order."},
  {"question": "What is the primary purpose of Step 2, 'Compare to Original Bid'?", "answer": "To ensure the total awarded amount in the contract matches the amount in your original bid."},
  {"question": "To maintain negotiating leverage, when is it critical to address any disputes or ambiguities in a contract?", "answer": "Before the contract is executed."},
  {"question": "A wise saying from the source material states, “What is not on paper _____”", "answer": "has not been said."},
  {"question": "If a General Contractor refuses to amend your proposal into the contract scope, what should you do?", "answer": "Review the contract thoroughly to uncover any potential hidden clauses that could cause costs or delays."},
  {"question": "When a contract is signed by both the subcontractor and the General Contractor, it is considered _____", "answer": "legally binding."},
  {"question": "What should you do if you receive a contract for signature that is missing the General Contractor's signature?", "answer": "Sign and return the contract, expecting a fully executed copy in return before commencing any work."},
  {"question": "In a post-signing kickoff meeting, what structural support should be confirmed with the GC for anchoring large exterior or interior signs?", "answer": "That the GC is providing 'blocking' (e.g., marine board) behind the walls."},
  {"question": "Who is typically responsible for pulling general permits as they relate to signage?", "answer": "The General Contractor (G.C.)."},
  {"question": "A _____ will be required with every Contract for Materials and Installation, but typically not for Purchase Orders for Materials Only.", "answer": "Certificate of Insurance (C.O.I.)"},
  {"question": "Who typically completes and provides the Certificate of Insurance (COI) form upon your request?", "answer": "Your insurance agent who handles your Business Owners Policy (BOP)."},
  {"question": "What is the primary function of a Certificate of Insurance (COI) in a construction project?", "answer": "It provides tangible proof that subcontractors have the necessary insurance coverage to protect against financial disasters and liability claims."},
  {"question": "Name three types of insurance coverage typically verified by a COI.", "answer": "General Liability, Auto Insurance, and Workers’ Compensation Insurance."},
  {"question": "Why is it crucial to provide a COI for 'stored materials'?", "answer": "To prove the materials are insured in case of damage or loss, preventing project delays or payment issues."},
  {"question": "Concept: Schedule of Values (S.O.V.)", "answer": "A detailed breakdown of the bid, enabling the General Contractor to see how costs are allocated across the project."},
  {"question": "In an SOV, you are entering the total value of each item, which includes your costs, _____, and overhead.", "answer": "mark-up"},
  {"question": "What is the purpose of a Project Participation Form?", "answer": "It lists all the important people on your team and their contact details for the General Contractor."},
  {"question": "For tax purposes, what form is required to verify a contractor's tax identification number?", "answer": "A W-9 Form."},
  {"question": "As payments are made, subcontractors may need to provide _____ to protect the owner from potential claims.", "answer": "Partial Release of Liens"},
  {"question": "OSHA 10-hour certification is sometimes required for workers on what types of projects?", "answer": "Public works or large municipal projects in certain states."},
  {"question": "After signing a contract, what key information should be entered into a Project Management System like Trello?", "answer": "Project name, location, contract info, GC contacts, contract value, location map, and scope of work."},
  {"question": "In the accounting system (QuickBooks), what must the Sales Order accurately represent?", "answer": "The material and labor costs as stipulated in the original contract's Schedule of Values."},
  {"question": "Why is establishing a Job Folder with paper copies of all electronic files a crucial step?", "answer": "They act as a dependable backup, mitigating the risk of information loss due to computer-related problems."},
  {"question": "Why must you request new quotes from manufacturers after a project is awarded, even if you received them during bidding?", "answer": "The initial price estimates might no longer be valid, as most quotes are only valid for 30 days."},
  {"question": "When requesting quotes from suppliers, what should you include in your email to clearly communicate your needs?", "answer": "All necessary details, including visual representations like drawings."},
  {"question": "After approving a manufacturer's quote, what document should you expect to receive within a few days?", "answer": "An 'Order Acknowledgement' showing receipt of what was approved."},
  {"question": "When submitting manufacturer drawings to the GC, what document should you check for any extra requirements?", "answer": "The original project specifications, specifically section 101400 Signage."},
  {"question": "What are four possible review outcomes an architect might mark on a submittal?", "answer": "Rejected, Reviewed, Approved as Noted, or Revise and Resubmit."},
  {"question": "According to the contract, how long does an architect typically have to review your drawings and samples?", "answer": "Two weeks."},
  {"question": "With whom should a subcontractor primarily direct their communications regarding a project?", "answer": "The General Contractor, as they are the entity with whom the subcontract exists."},
  {"question": "Once submittals are approved, what information should you obtain from the manufacturer regarding production?", "answer": "How long it will take to make (lead time) and when the products will be sent out (delivery date)."},
  {"question": "How much advance notice are you typically required to give a GC or site superintendent before a delivery arrives at a construction site?", "answer": "24 hours."},
  {"question": "Why might deliveries from a freight carrier require more attention than those from UPS or FedEx Ground?", "answer": "The freight carrier might be delivering to that jobsite for the first time, whereas regular UPS/FedEx drivers often know the site well."},
  {"question": "Under FOB _____ shipping terms, the buyer (subcontractor) assumes all risk once the seller (manufacturer) ships the product.", "answer": "Origin"},
  {"question": "Under FOB _____ shipping terms, the manufacturer retains responsibility for the goods until they reach the buyer's location.", "answer": "Destination"},
  {"question": "What is the safest approach regarding shipping terms and insurance?", "answer": "Clearly specify shipping terms in contracts, verify insurance coverage for materials in transit, and document the condition upon delivery."},
  {"question": "When requesting an installation quote, what document should you always ask the installer to provide?", "answer": "A Certificate of Insurance (COI)."},
  {"question": "What must you inform an installation company about if a project has a Prevailing Wage Order?", "answer": "They will be required to provide Certified Payroll Reports to the General Contractor."},
  {"question": "What does an NTE (Not-To-Exceed) limit on an installation quote prevent?", "answer": "It prevents the installer from performing extra work that costs more without contacting you for approval first."},
  {"question": "Why is it important for interior ADA signs to be installed on time per the project schedule?", "answer": "They must be installed for the building to pass inspection and get its occupancy permit."},
  {"question": "If possible, what should be done before installation day to confirm hardware needs and see the work areas?", "answer": "A pre-install jobsite visit."},
  {"question": "About a week before the installation date, who should you call to confirm the schedule and site readiness?", "answer": "Your installation company and the GC's jobsite superintendent."},
  {"question": "What is a 'Change Order' in the context of construction project management?", "answer": "A written approval from the General Contractor to perform work that is not part of the original scope/contract."},
  {"question": "If a jobsite superintendent asks you to perform extra work, what should you secure before proceeding?", "answer": "Written permission (email, text, or formal change order) from the GC showing approval and assurance of payment."},
  {"question": "For a 'materials only' Purchase Order, what should you request from the jobsite superintendent after delivery?", "answer": "A picture of the received product/boxes to confirm it was received and stored."},
  {"question": "What is the name of the standard American Institute of Architects (AIA) form used for payment applications?", "answer": "The G702/G703 Pay Application."},
  {"question": "Before getting an AIA G702/G703 form notarized, what is the recommended 'PRO TIP'?", "answer": "Send a copy to your accounting contact at the GC for them to double check everything is in order."},
  {"question": "To get paid for materials stored at your own shop, what documentation must you provide to the GC?", "answer": "Your COI showing stored materials coverage, plus pictures of the packing slip and signage."},
  {"question": "What is the final invoice submitted at the very end of a project for?", "answer": "To bill for the held retainage, which is usually 5% or 10% of the total contract value."},
  {"question": "What does the first step 'Awarded Contract / Receive PO' trigger in the project management process?", "answer": "The start of the entire project management workflow, beginning with contract review."},
  {"question": "In the project management flowchart, if submittals are not approved, what is the next step?", "answer": "Revise and Resubmit."},
  {"question": "What is the purpose of the 'Project Close-Out' phase?", "answer": "To provide warranty and maintenance documents and submit all required close-out documentation to the GC."},
  {"question": "The process of submitting manufacturer drawings and cut sheets to the GC for architect review is part of which major phase?", "answer": "Coordinate Submittals and Approvals."},
  {"question": "During which phase are project details entered into systems like Trello and QuickBooks?", "answer": "Set Up Project Management Systems."},
  {"question": "Confirming shipping details and monitoring delivery falls under which major process gate?", "answer": "Production and Shipment."}
]"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn two_card_deck() -> Deck {
        Deck::new(vec![
            Flashcard {
                question: "Q1".to_string(),
                answer: "A1".to_string(),
            },
            Flashcard {
                question: "Q2".to_string(),
                answer: "A2".to_string(),
            },
        ])
    }

    #[test]
    fn test_builtin_deck_parses() {
        let deck = Deck::builtin().unwrap();
        assert_eq!(deck.len(), 60);
        assert!(!deck.is_empty());
    }

    #[test]
    fn test_builtin_deck_cards_are_nonempty() {
        let deck = Deck::builtin().unwrap();
        for card in deck.cards() {
            assert!(!card.question.is_empty());
            assert!(!card.answer.is_empty());
        }
    }

    #[test]
    fn test_builtin_first_and_last_cards() {
        let deck = Deck::builtin().unwrap();
        assert!(deck.get(0).unwrap().question.contains("crucial first step"));
        assert_eq!(
            deck.get(59).unwrap().answer,
            "Production and Shipment."
        );
        assert!(deck.get(60).is_none());
    }

    #[test]
    fn test_cursor_starts_at_first_card_hidden() {
        let deck = two_card_deck();
        let cursor = deck.cursor();
        assert_eq!(cursor.current().unwrap().question, "Q1");
        assert!(!cursor.is_revealed());
        assert_eq!(cursor.position(), (1, 2));
    }

    #[test]
    fn test_cursor_next_and_prev() {
        let deck = two_card_deck();
        let mut cursor = deck.cursor();

        assert!(cursor.next());
        assert_eq!(cursor.current().unwrap().question, "Q2");
        assert!(cursor.prev());
        assert_eq!(cursor.current().unwrap().question, "Q1");
    }

    #[test]
    fn test_cursor_clamps_at_ends() {
        let deck = two_card_deck();
        let mut cursor = deck.cursor();

        assert!(!cursor.prev());
        assert_eq!(cursor.position(), (1, 2));

        assert!(cursor.next());
        assert!(!cursor.next());
        assert_eq!(cursor.position(), (2, 2));
    }

    #[test]
    fn test_navigation_hides_answer() {
        let deck = two_card_deck();
        let mut cursor = deck.cursor();

        cursor.reveal();
        assert!(cursor.is_revealed());
        cursor.next();
        assert!(!cursor.is_revealed());

        cursor.reveal();
        cursor.prev();
        assert!(!cursor.is_revealed());
    }

    #[test]
    fn test_failed_navigation_keeps_reveal_state() {
        let deck = two_card_deck();
        let mut cursor = deck.cursor();

        cursor.reveal();
        assert!(!cursor.prev());
        assert!(cursor.is_revealed());
    }

    #[test]
    fn test_toggle_and_hide() {
        let deck = two_card_deck();
        let mut cursor = deck.cursor();

        cursor.toggle();
        assert!(cursor.is_revealed());
        cursor.toggle();
        assert!(!cursor.is_revealed());
        cursor.reveal();
        cursor.hide();
        assert!(!cursor.is_revealed());
    }

    #[test]
    fn test_progress() {
        let deck = two_card_deck();
        let mut cursor = deck.cursor();

        assert!((cursor.progress() - 0.5).abs() < f64::EPSILON);
        cursor.next();
        assert!((cursor.progress() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_deck() {
        let deck = Deck::new(Vec::new());
        let mut cursor = deck.cursor();

        assert!(cursor.current().is_none());
        assert!(!cursor.next());
        assert!(!cursor.prev());
        assert_eq!(cursor.position(), (0, 0));
        assert!((cursor.progress() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_flashcard_round_trips_json() {
        let card = Flashcard {
            question: "Concept: Schedule of Values (S.O.V.)".to_string(),
            answer: "A detailed breakdown of the bid.".to_string(),
        };
        let json = serde_json::to_string(&card).unwrap();
        let parsed: Flashcard = serde_json::from_str(&json).unwrap();
        assert_eq!(card, parsed);
    }
}
