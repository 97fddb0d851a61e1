//! Privacy policy page

use leptos::prelude::*;

#[component]
pub fn PrivacyPage() -> impl IntoView {
    view! {
        <div class="page prose">
            <h1>"Privacy Policy"</h1>
            <p class="text-muted">"Last updated: January 29, 2025"</p>

            <h2>"Introduction"</h2>
            <p>
                "Santiago Camiro (\"we,\" \"our,\" or \"us\") operates Santiago.Gallery \
                 (the \"Service\"). This page informs you of our policies regarding the \
                 collection, use, and disclosure of personal data when you use our \
                 Service and the choices you have associated with that data."
            </p>

            <h2>"Information We Collect"</h2>
            <h3>"Personal Information"</h3>
            <p>
                "As an independent artist, we may collect personal information that you \
                 voluntarily provide to us when you:"
            </p>
            <ul>
                <li>"Subscribe to our newsletter"</li>
                <li>"Contact us for inquiries about artwork"</li>
                <li>"Request information about exhibitions or workshops"</li>
                <li>"Engage with our content or social media"</li>
            </ul>

            <h3>"Usage Data"</h3>
            <p>
                "We may collect information about how the Service is accessed and used. \
                 This usage data may include information such as your computer's Internet \
                 Protocol address, browser type, browser version, pages visited, time \
                 spent on pages, and other diagnostic data."
            </p>

            <h2>"How We Use Your Information"</h2>
            <p>"Santiago.Gallery uses the collected data for various purposes:"</p>
            <ul>
                <li>"To provide and maintain our Service"</li>
                <li>"To notify you about changes to our Service"</li>
                <li>"To provide customer support"</li>
                <li>"To gather analysis or valuable information to improve our Service"</li>
                <li>"To monitor usage of our Service"</li>
                <li>"To send you newsletters and updates about new artwork and exhibitions"</li>
            </ul>

            <h2>"Data Security"</h2>
            <p>
                "The security of your data is important to us. We strive to use \
                 commercially acceptable means to protect your personal information, but \
                 remember that no method of transmission over the Internet or electronic \
                 storage is 100% secure."
            </p>

            <h2>"Third-Party Services"</h2>
            <p>
                "Our Service may contain links to other websites or services that are not \
                 operated by us. We strongly advise you to review the Privacy Policy of \
                 every site you visit. We have no control over and assume no \
                 responsibility for the content, privacy policies, or practices of any \
                 third-party sites or services."
            </p>

            <h2>"Your Rights"</h2>
            <p>
                "Depending on your location, you may have the following rights regarding \
                 your personal data:"
            </p>
            <ul>
                <li>"The right to access, update, or delete your information"</li>
                <li>"The right to rectification"</li>
                <li>"The right to object to processing"</li>
                <li>"The right to data portability"</li>
                <li>"The right to withdraw consent"</li>
            </ul>

            <h2>"Children's Privacy"</h2>
            <p>
                "Our Service does not address anyone under the age of 13. We do not \
                 knowingly collect personally identifiable information from anyone under \
                 the age of 13."
            </p>

            <h2>"Contact Information"</h2>
            <p>"If you have any questions about this Privacy Policy, please contact us:"</p>
            <ul>
                <li>"By email: privacy@santiago.gallery"</li>
                <li>"Through our contact form on the website"</li>
            </ul>

            <h2>"Changes to This Policy"</h2>
            <p>
                "We may update our Privacy Policy from time to time. We will notify you \
                 of any changes by posting the new Privacy Policy on this page and \
                 updating the \"Last updated\" date."
            </p>
        </div>
    }
}
