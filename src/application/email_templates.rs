use url::Url;

const BRAND_NAME: &str = "admindesk";

fn origin_label(app_origin: &str) -> String {
    Url::parse(app_origin)
        .ok()
        .and_then(|url| url.host_str().map(|host| host.to_string()))
        .unwrap_or_else(|| app_origin.to_string())
}

pub fn primary_button(url: &str, label: &str) -> String {
    format!(
        r#"<a href="{url}" style="display:inline-block;padding:12px 18px;background-color:#111827;color:#ffffff;text-decoration:none;border-radius:8px;font-weight:600;">{label}</a>"#
    )
}

/// Reset-link email sent by the forgot-password flow.
pub fn password_reset_email(app_origin: &str, reset_link: &str) -> (String, String) {
    let subject = "Password Reset Request".to_string();
    let headline = "Reset your password";
    let lead = "You requested a password reset for your admin account.";
    let button = primary_button(reset_link, "Reset password");
    let body = format!(
        r#"{button}<p style="margin:12px 0 0;color:#374151;">This link is valid for 10 minutes and can be used once.</p>"#
    );
    let reason = "a password reset was requested for your account";

    let html = wrap_email(app_origin, headline, lead, &body, reason);
    (subject, html)
}

/// Sent when an administrator account is provisioned with a temporary password.
pub fn temporary_password_email(
    app_origin: &str,
    login_email: &str,
    temp_password: &str,
) -> (String, String) {
    let subject = "Your administrator account".to_string();
    let headline = "Your account has been created";
    let lead = format!(
        "An administrator account was created for <strong>{login_email}</strong>."
    );
    let body = format!(
        r#"<p style="margin:12px 0 0;color:#374151;">Sign in with the temporary password below and change it right away:</p><p style="margin:12px 0 0;font-family:monospace;font-size:16px;color:#111827;">{temp_password}</p>"#
    );
    let reason = "an account was provisioned for you";

    let html = wrap_email(app_origin, headline, &lead, &body, reason);
    (subject, html)
}

fn wrap_email(app_origin: &str, headline: &str, lead: &str, body_html: &str, reason: &str) -> String {
    let origin = origin_label(app_origin);
    let reason_label = "Why you got this email";
    let ignore_line = "If you didn't request this, you can safely ignore it.";

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <body style="background:#f8fafc;margin:0;padding:24px;font-family:Arial,Helvetica,sans-serif;">
    <div style="max-width:560px;margin:0 auto;background:#ffffff;border:1px solid #e5e7eb;border-radius:12px;padding:24px;box-shadow:0 8px 30px rgba(0,0,0,0.04);">
      <div style="font-size:12px;letter-spacing:0.08em;text-transform:uppercase;color:#6b7280;">{brand} - {origin}</div>
      <h1 style="margin:12px 0 8px;font-size:22px;color:#111827;">{headline}</h1>
      <p style="margin:0 0 12px;font-size:15px;color:#111827;line-height:1.6;">{lead}</p>
      {body_html}
      <div style="margin-top:20px;padding-top:16px;border-top:1px solid #e5e7eb;">
        <p style="margin:0 0 6px;font-size:13px;color:#4b5563;">{reason_label}: {reason}.</p>
        <p style="margin:0;font-size:13px;color:#4b5563;">{ignore_line}</p>
      </div>
      <p style="margin:14px 0 4px;font-size:12px;color:#9ca3af;">Sent by {brand} - {origin}</p>
    </div>
  </body>
</html>
"#,
        brand = BRAND_NAME,
        origin = origin,
        headline = headline,
        lead = lead,
        body_html = body_html,
        reason = reason,
        reason_label = reason_label,
        ignore_line = ignore_line,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_email_embeds_the_link() {
        let (subject, html) =
            password_reset_email("https://panel.example.com", "https://panel.example.com/reset?token=abc");
        assert_eq!(subject, "Password Reset Request");
        assert!(html.contains("https://panel.example.com/reset?token=abc"));
        assert!(html.contains("panel.example.com"));
    }

    #[test]
    fn temp_password_email_contains_the_password() {
        let (_, html) =
            temporary_password_email("https://panel.example.com", "new@example.com", "tmp-Secret1");
        assert!(html.contains("tmp-Secret1"));
        assert!(html.contains("new@example.com"));
    }
}
