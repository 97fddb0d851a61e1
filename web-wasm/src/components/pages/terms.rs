//! Terms and conditions page

use leptos::prelude::*;

#[component]
pub fn TermsPage() -> impl IntoView {
    view! {
        <div class="page prose">
            <h1>"Terms and Conditions"</h1>
            <p class="text-muted">"Last updated: January 29, 2025"</p>

            <h2>"1. Acceptance of Terms"</h2>
            <p>
                "By accessing and using Santiago.Gallery (the \"Service\"), you accept \
                 and agree to be bound by the terms and provision of this agreement. \
                 These Terms and Conditions govern your use of the Service operated by \
                 Santiago Camiro, an independent artist."
            </p>

            <h2>"2. Description of Service"</h2>
            <p>
                "Santiago.Gallery is an online platform showcasing the artistic works of \
                 Santiago Camiro, an independent contemporary artist. The Service \
                 includes viewing artwork galleries, learning about the artist, and \
                 potentially purchasing or inquiring about artwork."
            </p>

            <h2>"3. Intellectual Property Rights"</h2>
            <p>
                "All artwork, images, text, graphics, logos, and other content displayed \
                 on Santiago.Gallery are the intellectual property of Santiago Camiro \
                 unless otherwise noted. This includes but is not limited to:"
            </p>
            <ul>
                <li>"Original paintings, drawings, and mixed media works"</li>
                <li>"Digital art and photography"</li>
                <li>"Written descriptions and artist statements"</li>
                <li>"Website design and layout"</li>
            </ul>
            <p>
                "You may not reproduce, distribute, modify, create derivative works of, \
                 publicly display, publicly perform, republish, download, store, or \
                 transmit any of the material on our Service without prior written \
                 consent from Santiago Camiro."
            </p>

            <h2>"4. User Conduct"</h2>
            <p>"You agree not to use the Service:"</p>
            <ul>
                <li>"For any unlawful purpose or to solicit others to unlawful acts"</li>
                <li>
                    "To violate any international, federal, provincial, or state \
                     regulations, rules, laws, or local ordinances"
                </li>
                <li>
                    "To infringe upon or violate our intellectual property rights or the \
                     intellectual property rights of others"
                </li>
                <li>
                    "To harass, abuse, insult, harm, defame, slander, disparage, \
                     intimidate, or discriminate"
                </li>
                <li>"To submit false or misleading information"</li>
            </ul>

            <h2>"5. Artwork Sales and Commissions"</h2>
            <p>
                "Artwork availability is subject to change without notice. All prices \
                 are listed in USD unless otherwise specified and are subject to change \
                 without prior notice."
            </p>
            <p>
                "Custom commission work requires a separate agreement outlining specific \
                 terms, timeline, pricing, and deliverables. A deposit may be required \
                 before beginning commissioned work."
            </p>
            <p>
                "Shipping costs and insurance are additional unless otherwise stated. \
                 Santiago Camiro is not responsible for damage during shipping unless \
                 professional packing and shipping services were used."
            </p>

            <h2>"6. Privacy"</h2>
            <p>
                "Your privacy is important to us. Please review our Privacy Policy, \
                 which also governs your use of the Service, to understand our practices."
            </p>

            <h2>"7. Disclaimer of Warranties"</h2>
            <p>
                "The information on this website is provided on an \"as is\" basis. To \
                 the fullest extent permitted by law, Santiago Camiro excludes all \
                 representations, warranties, conditions, and other terms which might \
                 otherwise be implied by statute, common law, or the law of equity."
            </p>

            <h2>"8. Limitation of Liability"</h2>
            <p>
                "Santiago Camiro shall not be liable for any indirect, incidental, \
                 special, consequential, or punitive damages, including without \
                 limitation, loss of profits, data, use, goodwill, or other intangible \
                 losses resulting from your use of the Service."
            </p>

            <h2>"9. Independent Artist Status"</h2>
            <p>
                "Santiago Camiro operates as an independent artist. All transactions, \
                 communications, and agreements are made directly with Santiago Camiro \
                 as an individual artist, not as part of any larger organization or \
                 gallery representation."
            </p>

            <h2>"10. Governing Law"</h2>
            <p>
                "These Terms shall be interpreted and governed by the laws of Spain, \
                 without regard to its conflict of law provisions."
            </p>

            <h2>"11. Changes to Terms"</h2>
            <p>
                "We reserve the right, at our sole discretion, to modify or replace \
                 these Terms at any time. If a revision is material, we will try to \
                 provide at least 30 days notice prior to any new terms taking effect."
            </p>

            <h2>"12. Contact Information"</h2>
            <p>
                "If you have any questions about these Terms and Conditions, please \
                 contact us:"
            </p>
            <ul>
                <li>"Email: legal@santiago.gallery"</li>
                <li>"Website: www.santiago.gallery"</li>
            </ul>
        </div>
    }
}
