// ledgerflow-site/src/features/pages/sections.rs

//! ページを構成するセクションのレンダラー
//!
//! 料金表・設問・時間枠などは JSON API と同じ静的テーブルから描画する。
//! 動的な振る舞いは `/assets/site.js` が `data-*` 属性を手がかりに付与する。

use crate::features::assessment::models::QUESTIONS;
use crate::features::assessment::session::AssessmentSession;
use crate::features::contact::models::{
    BUSINESS_CONTACT, BUSINESS_TYPES, DEFAULT_TIMEZONE, SERVICE_INTERESTS, TIME_SLOTS,
};
use crate::features::pricing::models::{AddOn, BaseTier, BusinessSize};
use crate::features::pricing::service::{estimate, PricingSelection};
use crate::utils::html::escape_html;
use crate::utils::validation::common;

struct ServiceCard {
    title: &'static str,
    description: &'static str,
    features: [&'static str; 4],
}

const SERVICE_CARDS: [ServiceCard; 4] = [
    ServiceCard {
        title: "Simple Bookkeeping & Expense Tracking",
        description: "Daily transaction recording and expense categorization",
        features: [
            "Daily transaction entry",
            "Expense categorization",
            "Bank reconciliation",
            "Monthly reports",
        ],
    },
    ServiceCard {
        title: "Complex Tax Form Preparation",
        description: "Monthly and yearly tax compliance made simple",
        features: [
            "Form 1099s",
            "Quarterly tax prep",
            "Annual tax returns",
            "Tax strategy planning",
        ],
    },
    ServiceCard {
        title: "Payroll & HR Solutions",
        description: "Complete payroll management and compliance",
        features: [
            "Employee payroll",
            "Tax withholdings",
            "Benefits tracking",
            "Compliance reporting",
        ],
    },
    ServiceCard {
        title: "Business Planning & Analysis",
        description: "Strategic financial planning for growth",
        features: [
            "Cash flow analysis",
            "Budget planning",
            "Financial forecasting",
            "Growth strategies",
        ],
    },
];

struct ServiceDetail {
    title: &'static str,
    subtitle: &'static str,
    description: &'static str,
    features: [&'static str; 8],
    pricing: &'static str,
}

const SERVICE_DETAILS: [ServiceDetail; 4] = [
    ServiceDetail {
        title: "Simple to Complex Bookkeeping",
        subtitle: "Complete daily financial management",
        description: "From basic transaction recording to comprehensive financial management, we handle all aspects of your business bookkeeping with precision and care.",
        features: [
            "Daily transaction entry and categorization",
            "Bank and credit card reconciliation",
            "Accounts payable and receivable management",
            "Chart of accounts setup and maintenance",
            "Monthly financial statements preparation",
            "Expense tracking and reporting",
            "Inventory management (if applicable)",
            "Multi-location business consolidation",
        ],
        pricing: "Starting at $299/month",
    },
    ServiceDetail {
        title: "Tax Forms (Monthly/Yearly)",
        subtitle: "Comprehensive tax compliance solutions",
        description: "Stay compliant with all tax obligations. We prepare and file all necessary tax forms, from monthly sales tax to annual corporate returns.",
        features: [
            "Monthly sales tax preparation and filing",
            "Quarterly payroll tax returns",
            "Annual business tax returns (1120, 1120S, 1065, Sch C)",
            "Form 1099 preparation and distribution",
            "State and local tax compliance",
            "Tax planning and strategy consultation",
            "Audit support and representation",
            "Amendment preparation if needed",
        ],
        pricing: "Starting at $150/month",
    },
    ServiceDetail {
        title: "Payroll Management",
        subtitle: "Complete employee payment solutions",
        description: "Comprehensive payroll services that ensure your employees are paid accurately and on time, while maintaining full compliance with all regulations.",
        features: [
            "Weekly, bi-weekly, or monthly payroll processing",
            "Federal and state tax withholding calculations",
            "Direct deposit setup and management",
            "Employee benefits administration",
            "Workers compensation reporting",
            "Unemployment insurance management",
            "Year-end W-2 and W-3 preparation",
            "New hire reporting to state agencies",
        ],
        pricing: "Starting at $45/employee/month",
    },
    ServiceDetail {
        title: "Business Planning & Strategic Analysis",
        subtitle: "Financial insights for business growth",
        description: "Strategic financial planning and analysis to help your business make informed decisions and achieve sustainable growth.",
        features: [
            "Cash flow forecasting and analysis",
            "Budget creation and monitoring",
            "Financial ratio analysis and benchmarking",
            "Break-even analysis and pricing strategies",
            "Profit and loss trend analysis",
            "Business expansion financial modeling",
            "Investment analysis and ROI calculations",
            "Strategic planning consultation",
        ],
        pricing: "Starting at $500/month",
    },
];

const ADDITIONAL_SERVICES: [(&str, &str); 6] = [
    (
        "Financial Statement Preparation",
        "Monthly, quarterly, and annual financial statements",
    ),
    (
        "Budget Analysis & Forecasting",
        "Detailed budget planning and variance analysis",
    ),
    (
        "Multi-Entity Consolidation",
        "Consolidating financials across multiple business entities",
    ),
    (
        "Credit Management",
        "Credit monitoring and improvement strategies",
    ),
    (
        "Excel Expertise & Custom Reports",
        "Advanced Excel modeling and custom financial reporting",
    ),
    (
        "Cost Reduction Analysis",
        "Identifying opportunities to reduce operational costs",
    ),
];

fn check_list(items: &[&str]) -> String {
    let items: String = items
        .iter()
        .map(|item| format!("<li>{}</li>", escape_html(item)))
        .collect();
    format!(r#"<ul class="check-list">{}</ul>"#, items)
}

fn select_options(options: &[&str], placeholder: &str) -> String {
    let mut html = format!(r#"<option value="">{}</option>"#, escape_html(placeholder));
    for option in options {
        let option = escape_html(option);
        html.push_str(&format!(r#"<option value="{0}">{0}</option>"#, option));
    }
    html
}

fn form_status() -> &'static str {
    r#"<div class="form-status" data-role="status" role="status" aria-live="polite" hidden></div>"#
}

// =============================================================================
// トップページ
// =============================================================================

pub fn hero() -> String {
    format!(
        r##"<section class="hero" id="about">
  <div class="container hero-grid">
    <div>
      <h1>Tired of Tax Time <span class="accent">Headaches?</span>
        <span class="subhead">We Handle the Numbers, You Grow Your Business</span></h1>
      <p class="lead">Stop losing sleep over bookkeeping mistakes and wasted time. Our 30+ years of financial management expertise ensures your books are accurate, compliant, and growth-focused.</p>
      <div class="trust-grid">
        <div><strong>30+ Years Experience</strong><span>in Financial Management</span></div>
        <div><strong>Trusted by 500+</strong><span>Small Businesses</span></div>
        <div><strong>Time-Saving,</strong><span>Stress-Free Solutions</span></div>
      </div>
      <a href="#lead-form" class="button button-primary">Get Started - Free Consultation</a>
    </div>
    <div class="card">
      <h2>Let's Connect</h2>
      <p>Tell us about your two biggest bookkeeping challenges</p>
      {form}
    </div>
  </div>
</section>"##,
        form = quick_lead_form(),
    )
}

fn quick_lead_form() -> String {
    format!(
        r#"<form id="lead-form" class="stack" data-endpoint="/api/contact">
        <div class="field-row">
          <label>Business Name<input name="businessName" type="text" required></label>
          <label>Your Name<input name="contactName" type="text" required></label>
        </div>
        <div class="field-row">
          <label>Email Address<input name="email" type="email" required></label>
          <label>Phone Number<input name="phone" type="tel"></label>
        </div>
        <label>Biggest Bookkeeping Problem #1
          <textarea name="primaryChallenge" rows="2" required placeholder="e.g., Always behind on monthly reconciliation..."></textarea></label>
        <label>Biggest Bookkeeping Problem #2
          <textarea name="secondaryChallenge" rows="2" required placeholder="e.g., Tax preparation is always stressful..."></textarea></label>
        <button type="submit" class="button button-primary">Submit</button>
        {status}
      </form>"#,
        status = form_status(),
    )
}

pub fn service_cards() -> String {
    let cards: String = SERVICE_CARDS
        .iter()
        .map(|card| {
            format!(
                r#"<article class="card service-card">
        <h3>{title}</h3>
        <p>{description}</p>
        {features}
        <a href="/services" class="button button-outline">Learn More</a>
      </article>"#,
                title = escape_html(card.title),
                description = escape_html(card.description),
                features = check_list(&card.features),
            )
        })
        .collect();

    format!(
        r#"<section class="section" id="services">
  <div class="container">
    <h2 class="section-title">Our Services</h2>
    <p class="section-lead">From simple daily bookkeeping to complex business planning, we provide comprehensive financial services tailored to your business needs.</p>
    <div class="card-grid">
      {cards}
    </div>
    <div class="highlight-grid">
      <div><h4>Cost-Effective Solutions</h4><p>Save money compared to hiring full-time bookkeeping staff</p></div>
      <div><h4>Time-Saving Expertise</h4><p>Focus on growing your business while we handle the numbers</p></div>
      <div><h4>Excel Expertise</h4><p>Advanced Excel skills for detailed financial analysis and reporting</p></div>
    </div>
  </div>
</section>"#,
        cards = cards,
    )
}

/// 簿記課題アセスメント（1問ずつ表示し、最後に採点APIを呼ぶ）
pub fn assessment_widget() -> String {
    assessment_widget_for(&AssessmentSession::new())
}

/// セッションの状態（表示中の設問・進捗・結果）に合わせて描画する
pub fn assessment_widget_for(session: &AssessmentSession) -> String {
    let total = QUESTIONS.len();
    let current = session.current_index();
    let progress = session.progress_percent();
    let result = session.result();

    let questions: String = QUESTIONS
        .iter()
        .enumerate()
        .map(|(index, question)| {
            let selected = session.answers().get(question.id);
            let options: String = question
                .options
                .iter()
                .map(|option| {
                    let class = if selected.map(String::as_str) == Some(option.value) {
                        "option selected"
                    } else {
                        "option"
                    };
                    format!(
                        r#"<button type="button" class="{}" data-value="{}">{}</button>"#,
                        class,
                        escape_html(option.value),
                        escape_html(option.label)
                    )
                })
                .collect();
            format!(
                r#"<fieldset class="question" data-question-id="{id}" data-index="{index}"{hidden}>
          <legend>{prompt}</legend>
          <div class="options">{options}</div>
        </fieldset>"#,
                id = escape_html(question.id),
                index = index,
                hidden = if index == current { "" } else { " hidden" },
                prompt = escape_html(question.prompt),
                options = options,
            )
        })
        .collect();

    let (level, description, score, max_score, services) = match &result {
        Some(result) => (
            escape_html(result.recommendation.level),
            escape_html(result.recommendation.description),
            result.score.to_string(),
            result.max_score.to_string(),
            result
                .recommendation
                .services
                .iter()
                .map(|service| format!("<li>{}</li>", escape_html(service)))
                .collect::<String>(),
        ),
        None => Default::default(),
    };

    format!(
        r#"<section class="section section-muted" id="assessment" data-widget="assessment" data-total="{total}">
  <div class="container narrow">
    <h2 class="section-title">Bookkeeping Problem Assessment</h2>
    <p class="section-lead">Answer a few quick questions to get personalized service recommendations</p>
    <div class="card" data-role="quiz"{quiz_hidden}>
      <div class="quiz-header">
        <strong>Question <span data-role="number">{number}</span> of {total}</strong>
        <span><span data-role="progress">{progress}</span>% Complete</span>
      </div>
      <progress max="100" value="{progress}" data-role="progress-bar"></progress>
      {questions}
      <button type="button" class="button button-ghost" data-action="back"{back_hidden}>Previous Question</button>
    </div>
    <div class="card" data-role="result"{result_hidden}>
      <h3>Your Bookkeeping Assessment Results</h3>
      <p>Based on your responses, here are our recommendations</p>
      <div class="result-band">
        <h4 data-role="level">{level}</h4>
        <p data-role="description">{description}</p>
        <p>Score: <span data-role="score">{score}</span> / <span data-role="max-score">{max_score}</span></p>
        <h5>Recommended Services:</h5>
        <ul class="badge-list" data-role="services">{services}</ul>
      </div>
      <p>Ready to solve these bookkeeping challenges with our 30+ years of expertise?</p>
      <a href="/contact" class="button button-primary">Schedule Free Consultation</a>
      <button type="button" class="button button-outline" data-action="retake">Retake Assessment</button>
    </div>
    <p class="note">This assessment takes less than 2 minutes and provides personalized recommendations</p>
  </div>
</section>"#,
        total = total,
        number = current + 1,
        progress = progress,
        questions = questions,
        quiz_hidden = if session.is_complete() { " hidden" } else { "" },
        back_hidden = if current == 0 || session.is_complete() { " hidden" } else { "" },
        result_hidden = if result.is_some() { "" } else { " hidden" },
        level = level,
        description = description,
        score = score,
        max_score = max_score,
        services = services,
    )
}

// =============================================================================
// サービスページ
// =============================================================================

pub fn service_details() -> String {
    let details: String = SERVICE_DETAILS
        .iter()
        .map(|detail| {
            format!(
                r#"<article class="service-detail">
      <span class="pill">{title}</span>
      <h2>{subtitle}</h2>
      <p>{description}</p>
      {features}
      <div class="price-row">
        <div><strong>{pricing}</strong><small>Custom packages available</small></div>
        <a href="/contact" class="button button-primary">Get Quote</a>
      </div>
    </article>"#,
                title = escape_html(detail.title),
                subtitle = escape_html(detail.subtitle),
                description = escape_html(detail.description),
                features = check_list(&detail.features),
                pricing = escape_html(detail.pricing),
            )
        })
        .collect();

    let additional: String = ADDITIONAL_SERVICES
        .iter()
        .map(|(title, description)| {
            format!(
                r#"<div class="card"><h3>{}</h3><p>{}</p></div>"#,
                escape_html(title),
                escape_html(description)
            )
        })
        .collect();

    format!(
        r#"<section class="section">
  <div class="container">
    <h1 class="page-title">Professional Bookkeeping Services</h1>
    <p class="section-lead">With over 30 years of financial management experience, we provide comprehensive bookkeeping solutions that scale with your business. From startup to established enterprise, we've got you covered.</p>
    <a href="/contact" class="button button-primary">Get Your Free Consultation</a>
    {details}
    <h2 class="section-title">Additional Services</h2>
    <p class="section-lead">Specialized services to meet your unique business needs</p>
    <div class="card-grid">{additional}</div>
    <div class="cta">
      <h2>Ready to Streamline Your Bookkeeping?</h2>
      <p>Let our 30+ years of expertise take the burden of financial management off your shoulders. Schedule your free consultation today.</p>
      <a href="/contact" class="button button-primary">Schedule Free Consultation</a>
      <a href="tel:{tel}" class="button button-outline">Call {phone}</a>
    </div>
  </div>
</section>"#,
        details = details,
        additional = additional,
        tel = BUSINESS_CONTACT.phone.replace(['(', ')', ' '], ""),
        phone = BUSINESS_CONTACT.phone,
    )
}

/// 料金計算ウィジェット（初期表示は既定の選択で計算済み）
pub fn pricing_calculator() -> String {
    let defaults = PricingSelection::default();
    let initial = estimate(&defaults);

    let sizes: String = BusinessSize::all()
        .into_iter()
        .map(|size| {
            format!(
                r#"<label class="choice"><input type="radio" name="businessSize" value="{id}"{checked}> {name}</label>"#,
                id = size.id(),
                checked = if size == defaults.business_size { " checked" } else { "" },
                name = escape_html(size.name()),
            )
        })
        .collect();

    let tiers: String = BaseTier::all()
        .into_iter()
        .map(|tier| {
            format!(
                r#"<label class="choice"><input type="radio" name="baseTier" value="{id}"{checked}>
          <span><strong>{name}</strong><small>{description}</small><em>${price}/month</em></span></label>"#,
                id = tier.id(),
                checked = if tier == defaults.base_tier { " checked" } else { "" },
                name = escape_html(tier.name()),
                description = escape_html(tier.description()),
                price = tier.price(),
            )
        })
        .collect();

    let add_ons: String = AddOn::all()
        .into_iter()
        .map(|add_on| {
            format!(
                r#"<label class="choice"><input type="checkbox" name="addOns" value="{id}"{per_employee}>
          <span><strong>{name}</strong><small>${price} {unit}</small></span></label>"#,
                id = add_on.id(),
                per_employee = if add_on.is_per_employee() {
                    r#" data-per-employee="true""#
                } else {
                    ""
                },
                name = escape_html(add_on.name()),
                price = add_on.price(),
                unit = escape_html(add_on.unit()),
            )
        })
        .collect();

    format!(
        r#"<section class="section section-muted" id="calculator" data-widget="calculator">
  <div class="container">
    <span class="pill">Service Calculator</span>
    <h2 class="section-title">Estimate Your Monthly Investment</h2>
    <p class="section-lead">Get an instant estimate for your bookkeeping services. All packages include our 30+ years of expertise and personalized support.</p>
    <div class="calculator-grid">
      <form class="stack" data-role="calculator-form">
        <fieldset class="card"><legend>Business Size</legend>
          <p>Select the option that best describes your business transaction volume</p>
          {sizes}
        </fieldset>
        <fieldset class="card"><legend>Base Bookkeeping Package</legend>
          <p>Choose your primary service level</p>
          {tiers}
        </fieldset>
        <fieldset class="card"><legend>Additional Services</legend>
          <p>Select any additional services you need</p>
          {add_ons}
          <label data-role="employees" hidden>Number of Employees
            <input type="number" name="employeeCount" min="{min_employees}" max="{max_employees}" value="{employees}"></label>
        </fieldset>
      </form>
      <aside class="card estimate">
        <h3>Your Estimate</h3>
        <ul class="line-items" data-role="lines">
          <li><span>{base_name}</span><span>${base_amount}</span></li>
        </ul>
        <p class="total"><span>Monthly Total:</span> <strong data-role="total">${total}</strong></p>
        {included}
        <a href="/contact" class="button button-primary">Get Started Today</a>
        <p class="note">*Prices are estimates. Final pricing may vary based on specific business needs.</p>
      </aside>
    </div>
  </div>
</section>"#,
        sizes = sizes,
        tiers = tiers,
        add_ons = add_ons,
        employees = defaults.employee_count,
        min_employees = common::pricing::MIN_EMPLOYEES,
        max_employees = common::pricing::MAX_EMPLOYEES,
        base_name = escape_html(&initial.base.name),
        base_amount = initial.base.amount.round(),
        total = initial.total,
        included = check_list(&[
            "30+ years expertise included",
            "Personalized support",
            "Free consultation included",
        ]),
    )
}

// =============================================================================
// お問い合わせページ
// =============================================================================

pub fn contact_section() -> String {
    let address = BUSINESS_CONTACT.address_lines.join("<br>");
    let hours = BUSINESS_CONTACT.hours.join("<br>");

    format!(
        r#"<section class="section">
  <div class="container">
    <h1 class="page-title">Get Your Free Consultation</h1>
    <p class="section-lead">Ready to solve your bookkeeping challenges? Let's discuss how our 30+ years of experience can help streamline your financial management.</p>
    <div class="contact-grid">
      <div class="stack">
        <div class="card">
          <h2>Contact Information</h2>
          <dl class="contact-list">
            <dt>Email</dt><dd>{email}</dd>
            <dt>Phone</dt><dd>{phone}</dd>
            <dt>Address</dt><dd>{address}</dd>
            <dt>Business Hours</dt><dd>{hours}</dd>
          </dl>
        </div>
        <div class="card">
          <h2>Schedule Consultation</h2>
          <p>Book a free 30-minute consultation</p>
          {consultation}
        </div>
      </div>
      <div class="card">
        <h2>Tell Us About Your Business</h2>
        <p>The more we know about your needs, the better we can help you</p>
        {lead}
      </div>
    </div>
  </div>
</section>"#,
        email = BUSINESS_CONTACT.email,
        phone = BUSINESS_CONTACT.phone,
        address = address,
        hours = hours,
        consultation = consultation_form(),
        lead = lead_form(),
    )
}

fn consultation_form() -> String {
    format!(
        r#"<form class="stack" data-endpoint="/api/contact/consultation">
            <label>Preferred Date<input name="preferredDate" type="date" required></label>
            <label>Time Slot<select name="timeSlot" required>{slots}</select></label>
            <input type="hidden" name="timezone" value="{timezone}">
            <button type="submit" class="button button-primary">Request Consultation</button>
            {status}
          </form>"#,
        slots = select_options(&TIME_SLOTS, "Select time"),
        timezone = DEFAULT_TIMEZONE,
        status = form_status(),
    )
}

fn lead_form() -> String {
    format!(
        r#"<form class="stack" data-endpoint="/api/contact">
          <div class="field-row">
            <label>Business Name *<input name="businessName" type="text" required placeholder="Your Business Name"></label>
            <label>Your Name *<input name="contactName" type="text" required placeholder="Your Full Name"></label>
          </div>
          <div class="field-row">
            <label>Email Address *<input name="email" type="email" required placeholder="your@email.com"></label>
            <label>Phone Number<input name="phone" type="tel" placeholder="(555) 123-4567"></label>
          </div>
          <div class="field-row">
            <label>Business Type<select name="businessType">{business_types}</select></label>
            <label>Primary Interest<select name="serviceInterest">{interests}</select></label>
          </div>
          <label>Biggest Bookkeeping Challenge #1 *
            <textarea name="primaryChallenge" rows="3" required placeholder="Describe your most pressing bookkeeping problem..."></textarea></label>
          <label>Biggest Bookkeeping Challenge #2 *
            <textarea name="secondaryChallenge" rows="3" required placeholder="What's your second biggest bookkeeping headache?"></textarea></label>
          <label>Additional Information
            <textarea name="additionalInfo" rows="3" placeholder="Any other details that would help us understand your needs..."></textarea></label>
          <fieldset class="inline-choices">
            <legend>How would you prefer to be contacted?</legend>
            <label><input type="radio" name="preferredContact" value="email" checked> Email</label>
            <label><input type="radio" name="preferredContact" value="phone"> Phone</label>
          </fieldset>
          <button type="submit" class="button button-primary">Send My Information</button>
          <p class="note">* Required fields. We'll respond within 24 hours and never share your information.</p>
          {status}
        </form>"#,
        business_types = select_options(&BUSINESS_TYPES, "Select business type"),
        interests = select_options(&SERVICE_INTERESTS, "What service interests you?"),
        status = form_status(),
    )
}

// =============================================================================
// 解約ページ
// =============================================================================

pub fn cancellation_form(user_id: Option<&str>) -> String {
    let user_id = user_id.map(escape_html).unwrap_or_default();

    format!(
        r#"<section class="section">
  <div class="container narrow">
    <div data-role="form-panel">
      <h1 class="page-title">Cancel Account</h1>
      <p class="section-lead">We're sorry to see you go. Please provide the details below to cancel your account.</p>
      <div class="alert alert-warning">
        <h3>Before you cancel</h3>
        <p>Account cancellation is permanent. All your data will be deleted and cannot be recovered.</p>
      </div>
      <form class="stack" data-endpoint="/api/account/cancel"
            data-confirm="Are you absolutely sure? This action cannot be undone. This will permanently delete your account and all associated data."
            data-success-panel="cancel-complete">
        <label>Account ID<input name="userId" type="text" required value="{user_id}"></label>
        <label>Reason for cancellation (optional)
          <textarea name="reason" rows="3" placeholder="Help us improve by telling us why you're leaving..."></textarea></label>
        <label>Confirmation email address
          <input name="confirmationEmail" type="email" placeholder="you@example.com"></label>
        <p class="note">A confirmation email will be sent to this address.</p>
        <div class="button-row">
          <a href="/" class="button button-outline">Keep My Account</a>
          <button type="submit" class="button button-danger">Cancel Account</button>
        </div>
        {status}
      </form>
    </div>
    <div class="card" id="cancel-complete" hidden>
      <h2>Account Cancelled Successfully</h2>
      <p>Your account has been cancelled and a confirmation email has been sent.</p>
      <a href="/" class="button button-primary">Return to Homepage</a>
    </div>
  </div>
</section>"#,
        user_id = user_id,
        status = form_status(),
    )
}
