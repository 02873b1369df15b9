// ledgerflow-site/src/features/pages/layout.rs

//! 全ページ共通のヘッダー・フッター

use crate::features::contact::models::BUSINESS_CONTACT;
use crate::utils::html::escape_html;

pub const SITE_NAME: &str = "LedgerFlow Bookkeeping";

/// ナビゲーション上の現在位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Home,
    Services,
    Contact,
    Account,
}

const NAV_LINKS: [(NavItem, &str, &str); 3] = [
    (NavItem::Services, "/services", "Services"),
    (NavItem::Home, "/#about", "About Us"),
    (NavItem::Contact, "/contact", "Contact"),
];

/// ページ全体を組み立てる
pub fn render_page(title: &str, active: NavItem, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title} | {site}</title>
  <link rel="stylesheet" href="/assets/site.css">
  <script src="/assets/site.js" defer></script>
</head>
<body>
{header}
<main>
{body}
</main>
{footer}
</body>
</html>
"#,
        title = escape_html(title),
        site = SITE_NAME,
        header = header(active),
        body = body,
        footer = footer(),
    )
}

fn logo() -> &'static str {
    r#"<a href="/" class="logo">
      <span class="logo-mark" aria-hidden="true">$</span>
      <span class="logo-text"><strong>LedgerFlow</strong><small>BOOKKEEPING</small></span>
    </a>"#
}

fn header(active: NavItem) -> String {
    let links: String = NAV_LINKS
        .iter()
        .map(|(item, href, label)| {
            let class = if *item == active && *item != NavItem::Home {
                " class=\"active\""
            } else {
                ""
            };
            format!(r#"<a href="{}"{}>{}</a>"#, href, class, label)
        })
        .collect::<Vec<_>>()
        .join("\n      ");

    format!(
        r#"<header class="site-header">
  <div class="container header-inner">
    {logo}
    <nav class="site-nav">
      {links}
    </nav>
    <a href="/contact" class="button button-primary">Get Free Consultation</a>
  </div>
</header>"#,
        logo = logo(),
        links = links,
    )
}

fn footer() -> String {
    format!(
        r#"<footer class="site-footer">
  <div class="container footer-grid">
    <div>
      {logo}
      <p>With 30+ years of financial management experience, we provide comprehensive bookkeeping services that help small businesses thrive. From daily transaction recording to strategic business planning, we're your trusted financial partner.</p>
    </div>
    <div>
      <h3>Services</h3>
      <ul>
        <li><a href="/services">Simple Bookkeeping</a></li>
        <li><a href="/services">Tax Form Preparation</a></li>
        <li><a href="/services">Payroll Solutions</a></li>
        <li><a href="/services">Business Planning</a></li>
      </ul>
    </div>
    <div>
      <h3>Contact</h3>
      <ul>
        <li>{email}</li>
        <li>{phone}</li>
        <li>{address}</li>
      </ul>
    </div>
  </div>
  <div class="container footer-bottom">
    <span>&copy; {site}. All rights reserved.</span>
    <a href="/account/cancel">Cancel Account</a>
  </div>
</footer>"#,
        logo = logo(),
        email = BUSINESS_CONTACT.email,
        phone = BUSINESS_CONTACT.phone,
        address = BUSINESS_CONTACT.address_lines.join("<br>"),
        site = SITE_NAME,
    )
}
